use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::json;

use crate::db;
use crate::error::AppError;
use crate::form;
use crate::state::SharedState;

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let request = form::parse_body(content_type, &body).map_err(AppError::BadRequest)?;
    let new = request.validate().map_err(AppError::BadRequest)?;

    let submission = db::submissions::create(&state.pool, &new.name, &new.email, &new.response)
        .await
        .map_err(|e| AppError::Database {
            context: "Error saving data to database".to_string(),
            source: e,
        })?;

    tracing::info!(id = submission.id, "stored submission");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Form submitted successfully",
            "user": submission,
        })),
    ))
}
