use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::web::error::AppError;

/// `axum::Json` with its rejection mapped into [`AppError`], so malformed or
/// wrong-typed bodies surface as the same 400 JSON shape as field-level
/// validation failures instead of axum's plain-text 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
