use crate::{scan::FileScanner, snapshot, Settings};
use anyhow::Result;
use std::path::PathBuf;

/// Print the current network snapshot assembled from a scan report
#[derive(Debug, clap::Args)]
pub struct Cmd {
    /// Path to a JSON scan report captured from the platform radio
    #[clap(long)]
    scan: PathBuf,
}

impl Cmd {
    pub async fn run(self, _settings: &Settings) -> Result<()> {
        let scanner = FileScanner::from_path(&self.scan)?;
        let info = snapshot::network_info(&scanner);
        println!("{}", serde_json::to_string_pretty(&info)?);
        Ok(())
    }
}
