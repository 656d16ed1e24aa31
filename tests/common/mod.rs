use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use webloom::config::{Config, StoreConfig};
use webloom::db;

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON payload to /submit, return (body, status).
    pub async fn submit(&self, payload: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(payload)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST form-urlencoded data to /submit, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET /users, return (body, status).
    pub async fn list_users(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/users"))
            .send()
            .await
            .expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Count stored rows directly, bypassing the HTTP surface.
    pub async fn count_submissions(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM submissions")
            .fetch_one(&self.pool)
            .await
            .expect("count query failed")
    }
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let store = StoreConfig::from_env().expect("Failed to load store config");

    // Create a unique test database
    let db_name = format!("webloom_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    // Connect to the postgres maintenance DB to create the test DB
    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(store.connect_options().database("postgres"))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    // Connect to the test DB and create the schema
    let test_store = StoreConfig {
        database: db_name.clone(),
        ..store
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(test_store.connect_options())
        .await
        .expect("Failed to connect to test database");

    db::schema::ensure_schema(&pool)
        .await
        .expect("Failed to create schema on test database");

    let config = Config {
        store: test_store,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    };

    let app = webloom::build_app(pool.clone(), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let store = StoreConfig::from_env().expect("Failed to load store config");

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(store.connect_options().database("postgres"))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
