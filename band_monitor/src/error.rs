use thiserror::Error;

pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("sql error")]
    Sql(#[from] sqlx::Error),
    #[error("migration error")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("config error")]
    Config(#[from] config::ConfigError),
    #[error("io error")]
    Io(#[from] std::io::Error),
    #[error("malformed scan report")]
    ScanReport(#[from] serde_json::Error),
}
