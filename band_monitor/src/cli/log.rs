use crate::{
    change_log::{self, ChangeLogRecord},
    scan::{CellObservation, FileScanner, Technology},
    snapshot, Settings,
};
use anyhow::Result;
use std::path::PathBuf;

/// Record a band change attempt against the current snapshot.
///
/// The attempt is logged intent only; no radio reconfiguration is performed.
#[derive(Debug, clap::Args)]
pub struct Cmd {
    /// Path to a JSON scan report captured from the platform radio
    #[clap(long)]
    scan: PathBuf,
    /// Target radio technology (lte, wcdma or nr)
    #[clap(long)]
    technology: Technology,
    /// Target channel number (EARFCN, UARFCN or NRARFCN)
    #[clap(long)]
    channel: i32,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let scanner = FileScanner::from_path(&self.scan)?;
        let info = snapshot::network_info(&scanner);

        let target = CellObservation {
            technology: self.technology,
            channel: Some(self.channel),
            signal_dbm: 0,
            registered: false,
        };
        let Some(new) = snapshot::parse_observation(&target) else {
            anyhow::bail!("band changes can only target lte, wcdma or nr cells");
        };

        let pool = settings.database.connect().await?;
        sqlx::migrate!().run(&pool).await?;

        let record = ChangeLogRecord::new(info.current_frequency.as_ref(), &new, &info);
        let id = change_log::insert(&pool, &record).await?;
        println!(
            "logged band change {} -> {} as record {id}",
            record.old_band, record.new_band
        );
        Ok(())
    }
}
