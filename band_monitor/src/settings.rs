use crate::db;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// RUST_LOG compatible settings string. Default to
    /// "band_monitor=debug,info"
    #[serde(default = "default_log")]
    pub log: String,
    #[serde(default)]
    pub database: db::Settings,
}

fn default_log() -> String {
    "band_monitor=debug,info".to_string()
}

impl Settings {
    /// Load Settings from a given path. Settings are loaded from a given
    /// optional path and can be overriden with environment variables.
    ///
    /// Environment overrides have the same name as the entries in the
    /// settings file in uppercase and prefixed with "BM_". For example
    /// "BM_DATABASE_URL" will override the database url.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(file) = path {
            // Add optional settings file
            builder = builder
                .add_source(File::with_name(&file.as_ref().to_string_lossy()).required(false));
        }
        // Add in settings from the environment (with a prefix of BM)
        builder
            .add_source(Environment::with_prefix("BM").separator("_"))
            .build()
            .and_then(|config| config.try_deserialize())
    }
}
