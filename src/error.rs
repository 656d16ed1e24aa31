use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Database {
        context: String,
        source: sqlx::Error,
    },
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Database { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                let body = json!({ "error": msg });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            AppError::Database { context, source } => {
                tracing::error!("{context}: {source}");
                let body = json!({
                    "error": context,
                    "details": source.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
