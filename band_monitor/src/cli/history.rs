use crate::{change_log, Settings};
use anyhow::Result;

/// List logged band change attempts, newest first
#[derive(Debug, clap::Args)]
pub struct Cmd {
    /// Maximum number of records to print. Prints everything when absent
    #[clap(long)]
    limit: Option<u32>,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let pool = settings.database.connect().await?;
        sqlx::migrate!().run(&pool).await?;

        let records = match self.limit {
            Some(limit) => change_log::list_recent(&pool, limit).await?,
            None => change_log::list_all(&pool).await?,
        };
        for record in &records {
            let when = record
                .timestamp()
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_else(|| record.timestamp_ms.to_string());
            println!(
                "{} {} {} ({}) -> {} ({}) [{}] operator={} type={}",
                record.id,
                when,
                record.old_band,
                record.old_frequency,
                record.new_band,
                record.new_frequency,
                record.status,
                record.operator_name,
                record.network_type,
            );
        }
        Ok(())
    }
}
