use std::net::IpAddr;

use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
}

/// Postgres connection settings. Every field has a fallback so a local
/// default install works with no environment at all.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(StoreConfig {
            host: env_or("PG_HOST", "localhost"),
            port: env_or("PG_PORT", "5432")
                .parse()
                .map_err(|e| format!("Invalid PG_PORT: {e}"))?,
            user: env_or("PG_USER", "postgres"),
            password: env_or("PG_PASSWORD", "postgres"),
            database: env_or("PG_DATABASE", "webloom"),
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let store = StoreConfig::from_env()?;

        let host: IpAddr = env_or("WEBLOOM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid WEBLOOM_HOST: {e}"))?;

        let port: u16 = env_or("WEBLOOM_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid WEBLOOM_PORT: {e}"))?;

        let max_body_size: usize = env_or("WEBLOOM_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid WEBLOOM_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("WEBLOOM_LOG_LEVEL", "info");

        Ok(Config {
            store,
            host,
            port,
            max_body_size,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
