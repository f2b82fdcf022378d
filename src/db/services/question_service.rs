use chrono::Utc;
use sqlx::{PgPool, Result};
use uuid::Uuid;

use crate::db::models::Question;

// --- Question Service Functions ---

/// Persists a question and its tag associations in a single transaction.
///
/// Either the question row and all of its `question_tags` rows commit
/// together, or none of them do. Tag rows themselves are created beforehand
/// by the tag service and are deliberately left outside this boundary: a tag
/// committed by a request that later fails is shareable and harmless.
pub async fn create_question(
    pool: &PgPool,
    text: &str,
    question_type: &str,
    is_required_for_match: bool,
    tag_ids: &[i32],
) -> Result<Question> {
    let mut tx = pool.begin().await?;

    let now = Utc::now();
    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (id, text, question_type, is_required_for_match, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING id, text, question_type, is_required_for_match, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(text)
    .bind(question_type)
    .bind(is_required_for_match)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO question_tags (question_id, tag_id)
        SELECT $1, tag_id
        FROM UNNEST($2::int4[]) AS tag_id
        ON CONFLICT (question_id, tag_id) DO NOTHING
        "#,
    )
    .bind(question.id)
    .bind(tag_ids)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(question)
}

/// Fetches a single question by id.
pub async fn get_question_by_id(pool: &PgPool, question_id: Uuid) -> Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, text, question_type, is_required_for_match, created_at, updated_at
        FROM questions
        WHERE id = $1
        "#,
    )
    .bind(question_id)
    .fetch_optional(pool)
    .await
}

/// Retrieves all questions, newest first.
pub async fn get_all_questions(pool: &PgPool) -> Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, text, question_type, is_required_for_match, created_at, updated_at
        FROM questions
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
