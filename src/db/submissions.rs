use sqlx::PgPool;

use crate::models::Submission;

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    response: &str,
) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions (name, email, response)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(response)
    .fetch_one(pool)
    .await
}

/// All submissions, most recent first. The id tie-break keeps the order
/// deterministic when two rows share a timestamp.
pub async fn list(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "SELECT * FROM submissions ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}
