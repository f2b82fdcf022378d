use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::enums::{QuestionType, is_recognized_tag_name};
use crate::db::models::{Question, Tag};
use crate::web::error::AppError;

pub const MAX_QUESTION_TEXT_CHARS: usize = 1000;

/// Raw creation payload as received from the client. Every field is optional
/// at the serde level so that missing fields surface as field-level
/// validation errors rather than a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateQuestionRequest {
    pub text: Option<String>,
    pub tags: Option<Vec<String>>,
    pub question_type: Option<String>,
    pub is_required_for_match: Option<bool>,
}

/// Validated, normalized form of a creation request. Produced only by
/// `CreateQuestionRequest::validate`; nothing touches the database before
/// this exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub text: String,
    pub tags: Vec<String>,
    pub question_type: QuestionType,
    pub is_required_for_match: bool,
}

impl CreateQuestionRequest {
    /// Checks payload shape and field constraints. Pure function of the
    /// input; no side effects.
    pub fn validate(self) -> Result<NewQuestion, AppError> {
        let text = self.text.as_deref().unwrap_or("").trim().to_string();
        if text.is_empty() {
            return Err(AppError::invalid_input(
                "text",
                "text is required and must not be empty",
            ));
        }
        if text.chars().count() > MAX_QUESTION_TEXT_CHARS {
            return Err(AppError::invalid_input(
                "text",
                format!("text must be at most {MAX_QUESTION_TEXT_CHARS} characters"),
            ));
        }

        let tags = self.tags.unwrap_or_default();
        if tags.is_empty() {
            return Err(AppError::invalid_input(
                "tags",
                "at least one tag is required",
            ));
        }
        for name in &tags {
            if !is_recognized_tag_name(name) {
                return Err(AppError::invalid_input(
                    "tags",
                    format!("unrecognized tag name: {name}"),
                ));
            }
        }

        let question_type = match self.question_type.as_deref() {
            Some(raw) => raw.parse::<QuestionType>().map_err(|_| {
                AppError::invalid_input(
                    "question_type",
                    format!("unrecognized question type: {raw}"),
                )
            })?,
            None => {
                return Err(AppError::invalid_input(
                    "question_type",
                    "question_type is required",
                ));
            }
        };

        Ok(NewQuestion {
            text,
            tags,
            question_type,
            is_required_for_match: self.is_required_for_match.unwrap_or(false),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: Uuid,
    pub text: String,
    pub tags: Vec<TagResponse>,
    pub question_type: String,
    pub is_required_for_match: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuestionResponse {
    /// Tags are listed by name so the creation response and later fetches
    /// agree on ordering.
    pub fn from_parts(question: Question, mut tags: Vec<Tag>) -> Self {
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        QuestionResponse {
            id: question.id,
            text: question.text,
            tags: tags
                .into_iter()
                .map(|tag| TagResponse {
                    id: tag.id,
                    name: tag.name,
                })
                .collect(),
            question_type: question.question_type,
            is_required_for_match: question.is_required_for_match,
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}
