pub mod change_log;
pub mod db;
mod error;
pub mod scan;
mod settings;
pub mod snapshot;

pub mod cli;

pub use error::{Error, Result};
pub use settings::Settings;
