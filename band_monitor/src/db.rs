use crate::Result;
use serde::Deserialize;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Max open connections to the database. If absent a default is used
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// URL to access the sqlite database. For example:
    /// sqlite://band_monitor.db
    pub url: String,
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            url: "sqlite://band_monitor.db".to_string(),
        }
    }
}

impl Settings {
    pub async fn connect(&self) -> Result<SqlitePool> {
        let options = SqliteConnectOptions::from_str(&self.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;
        Ok(pool)
    }
}
