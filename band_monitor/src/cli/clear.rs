use crate::{change_log, Settings};
use anyhow::Result;

/// Irreversibly wipe the band change history
#[derive(Debug, clap::Args)]
pub struct Cmd {}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let pool = settings.database.connect().await?;
        sqlx::migrate!().run(&pool).await?;

        change_log::clear_all(&pool).await?;
        println!("band change history cleared");
        Ok(())
    }
}
