pub mod submit;
pub mod users;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/submit", post(submit::submit))
        .route("/users", get(users::list))
}
