use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Represents a reusable categorical label shared by many questions.
/// Corresponds to the `tags` table; `name` carries a uniqueness constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// Represents a profiling question shown to users of the matching app.
/// Corresponds to the `questions` table. Tag associations live in the
/// `question_tags` join table, not on this row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub question_type: String,
    pub is_required_for_match: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
