use heroes_common::{config::Database, db};
use std::process::ExitCode;

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[command(flatten)]
    pub(crate) database: Database,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Apply pending migrations
    Migrate,
    /// Drop the schema and re-run all migrations
    Refresh,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        use Command::*;
        match self.command {
            Migrate => self.config(db::CreationMode::Default).await,
            Refresh => self.config(db::CreationMode::RefreshSchema).await,
        }
    }

    async fn config(self, mode: db::CreationMode) -> anyhow::Result<ExitCode> {
        log::info!("Database: {}", self.database);

        let db = db::Database::with_external_config(&self.database, mode).await?;
        db.close().await?;

        Ok(ExitCode::SUCCESS)
    }
}
