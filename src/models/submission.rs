use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}
