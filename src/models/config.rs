//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::db::PoolOptions;

fn default_pool_size() -> u32 {
    8
}

fn default_busy_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the HTTP server and the database pool.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    #[serde(default = "default_pool_size")]
    pub db_pool_size: u32,
    #[serde(default = "default_busy_timeout_secs")]
    pub db_busy_timeout_secs: u64,
}

impl ServerConfig {
    /// Pool options derived from the database settings.
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_size: self.db_pool_size.max(1),
            busy_timeout: Some(Duration::from_secs(self.db_busy_timeout_secs)),
            ..PoolOptions::default()
        }
    }
}
