use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{CreateSubmission, Submission};

/// All submissions, newest first. No pagination.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "SELECT id, name, email, message, created_at
         FROM submissions ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// Validate and insert a submission, returning the stored row.
///
/// Rejects blank (after trimming) name or email without touching the
/// database. Stored values are the raw inputs; trimming is validation-only.
pub async fn create(
    pool: &SqlitePool,
    req: &CreateSubmission,
) -> Result<Submission, AppError> {
    let missing = req.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation { missing });
    }

    let created_at = Utc::now();
    let message = req.message.as_deref().unwrap_or("");

    let submission = sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions (name, email, message, created_at)
         VALUES (?, ?, ?, ?)
         RETURNING id, name, email, message, created_at",
    )
    .bind(&req.name)
    .bind(&req.email)
    .bind(message)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    Ok(submission)
}
