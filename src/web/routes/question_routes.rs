use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::services;
use crate::web::extract::Json;
use crate::web::models::{CreateQuestionRequest, QuestionResponse};
use crate::web::{AppError, AppState};

// --- Route Handlers ---

/// The creation pipeline: validate, resolve tags, write question + links,
/// format the response.
async fn create_question_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionResponse>), AppError> {
    let request = payload.validate()?;

    let tags = services::resolve_tag_names(&app_state.db_pool, &request.tags).await?;
    let tag_ids: Vec<i32> = tags.iter().map(|tag| tag.id).collect();

    let question = services::create_question(
        &app_state.db_pool,
        &request.text,
        request.question_type.as_str(),
        request.is_required_for_match,
        &tag_ids,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(QuestionResponse::from_parts(question, tags)),
    ))
}

async fn get_question_handler(
    State(app_state): State<Arc<AppState>>,
    Path(question_id): Path<Uuid>,
) -> Result<Json<QuestionResponse>, AppError> {
    let question = services::get_question_by_id(&app_state.db_pool, question_id)
        .await?
        .ok_or(AppError::QuestionNotFound)?;
    let tags = services::get_tags_for_question(&app_state.db_pool, question_id).await?;
    Ok(Json(QuestionResponse::from_parts(question, tags)))
}

async fn list_questions_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<QuestionResponse>>, AppError> {
    let questions = services::get_all_questions(&app_state.db_pool).await?;
    let mut responses = Vec::with_capacity(questions.len());
    for question in questions {
        let tags = services::get_tags_for_question(&app_state.db_pool, question.id).await?;
        responses.push(QuestionResponse::from_parts(question, tags));
    }
    Ok(Json(responses))
}

// --- Router ---

// The collection endpoint is documented with a trailing slash and axum does
// no slash redirect, so both spellings are registered explicitly.
pub fn questions_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/questions",
            post(create_question_handler).get(list_questions_handler),
        )
        .route(
            "/api/questions/",
            post(create_question_handler).get(list_questions_handler),
        )
        .route("/api/questions/{question_id}", get(get_question_handler))
}
