pub mod submissions;

use axum::routing::get;
use axum::Json;
use axum::Router;
use serde_json::json;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/submissions",
            get(submissions::list).post(submissions::create),
        )
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
