use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::models::{CreateSubmission, Submission};
use crate::state::SharedState;

pub async fn list(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = db::submissions::list(&state.pool).await?;
    Ok(Json(submissions))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let submission = db::submissions::create(&state.pool, &req).await?;

    tracing::info!(id = submission.id, "Submission created");

    let location = format!("/api/submissions/{}", submission.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(submission),
    ))
}
