use axum::extract::State;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = db::submissions::list(&state.pool)
        .await
        .map_err(|e| AppError::Database {
            context: "Error fetching users".to_string(),
            source: e,
        })?;

    Ok(Json(submissions))
}
