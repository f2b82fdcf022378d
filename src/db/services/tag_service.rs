use sqlx::{PgPool, Result};
use uuid::Uuid;

use crate::db::models::Tag;

// --- Tag Service Functions ---

/// Fetches a tag by its exact name.
pub async fn get_tag_by_name(pool: &PgPool, name: &str) -> Result<Option<Tag>> {
    sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await
}

/// Inserts a tag, yielding `None` when another writer got there first.
/// `ON CONFLICT DO NOTHING` leans on the uniqueness constraint on `name`
/// so two racing requests can never produce two rows for one name.
async fn insert_tag(pool: &PgPool, name: &str) -> Result<Option<Tag>> {
    sqlx::query_as::<_, Tag>(
        r#"
        INSERT INTO tags (name)
        VALUES ($1)
        ON CONFLICT (name) DO NOTHING
        RETURNING id, name
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await
}

/// Resolves a tag name to its persisted row, creating it if absent.
///
/// When the insert loses a get-or-create race the row is re-fetched once and
/// treated as resolved; the conflict never surfaces to the caller.
pub async fn get_or_create_tag(pool: &PgPool, name: &str) -> Result<Tag> {
    if let Some(tag) = get_tag_by_name(pool, name).await? {
        return Ok(tag);
    }

    if let Some(tag) = insert_tag(pool, name).await? {
        return Ok(tag);
    }

    // Lost the race, so the row must exist now.
    match get_tag_by_name(pool, name).await? {
        Some(tag) => Ok(tag),
        None => Err(sqlx::Error::RowNotFound),
    }
}

/// Resolves a list of tag names to persisted tags, creating missing ones.
/// Duplicate names in the input resolve to a single entry in the output.
pub async fn resolve_tag_names(pool: &PgPool, names: &[String]) -> Result<Vec<Tag>> {
    let mut resolved: Vec<Tag> = Vec::with_capacity(names.len());
    for name in names {
        if resolved.iter().any(|tag| tag.name == *name) {
            continue;
        }
        resolved.push(get_or_create_tag(pool, name).await?);
    }
    Ok(resolved)
}

/// Retrieves all tags associated with a question.
pub async fn get_tags_for_question(pool: &PgPool, question_id: Uuid) -> Result<Vec<Tag>> {
    sqlx::query_as::<_, Tag>(
        r#"
        SELECT t.id, t.name
        FROM tags t
        INNER JOIN question_tags qt ON t.id = qt.tag_id
        WHERE qt.question_id = $1
        ORDER BY t.name
        "#,
    )
    .bind(question_id)
    .fetch_all(pool)
    .await
}
