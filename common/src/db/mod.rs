use heroes_migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, ExecResult,
    QueryResult, SqlErr, Statement,
};
use std::{ops::Deref, time::Duration};
use tracing::instrument;
use url::Url;

/// How to treat the database schema on startup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CreationMode {
    /// Apply pending migrations
    #[default]
    Default,
    /// Drop everything and re-run all migrations
    RefreshSchema,
}

/// Closing the only connection to an in-memory database drops its content.
const IN_MEMORY_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 100);

#[derive(Clone, Debug)]
pub struct Database {
    /// the database connection
    db: DatabaseConnection,
}

impl Database {
    #[instrument(skip(database), fields(database = %database), err)]
    pub async fn new(database: &crate::config::Database) -> Result<Self, anyhow::Error> {
        let url = database.to_url();

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("connect to {}", strip_password(url.clone()));
        }

        let mut opt = ConnectOptions::new(url);
        opt.sqlx_logging_level(log::LevelFilter::Trace);

        if database.is_in_memory() {
            opt.max_connections(1);
            opt.min_connections(1);
            opt.max_lifetime(IN_MEMORY_LIFETIME);
            opt.idle_timeout(IN_MEMORY_LIFETIME);
        } else {
            opt.max_connections(database.max_conn);
            opt.min_connections(database.min_conn);
            opt.connect_timeout(Duration::from_secs(8));
            opt.idle_timeout(Duration::from_secs(8));
        }

        let db = sea_orm::Database::connect(opt).await?;

        Ok(Self { db })
    }

    /// Connect, and prepare the schema according to the creation mode.
    pub async fn with_external_config(
        database: &crate::config::Database,
        mode: CreationMode,
    ) -> Result<Self, anyhow::Error> {
        let db = Self::new(database).await?;

        match mode {
            CreationMode::Default => db.migrate().await?,
            CreationMode::RefreshSchema => db.refresh().await?,
        }

        Ok(db)
    }

    /// Create a fresh, migrated, in-memory SQLite database.
    pub async fn in_memory() -> Result<Self, anyhow::Error> {
        let config = crate::config::Database {
            url: Some("sqlite::memory:".into()),
            name: "memory".into(),
            ..Default::default()
        };

        Self::with_external_config(&config, CreationMode::Default).await
    }

    #[instrument(skip(self), err)]
    pub async fn migrate(&self) -> Result<(), anyhow::Error> {
        log::debug!("applying migrations");
        Migrator::up(&self.db, None).await?;
        log::debug!("applied migrations");

        Ok(())
    }

    #[instrument(skip(self), err)]
    pub async fn refresh(&self) -> Result<(), anyhow::Error> {
        log::warn!("refreshing database schema...");
        Migrator::refresh(&self.db).await?;
        log::warn!("refreshing database schema... done!");

        Ok(())
    }

    #[instrument(skip(self), err)]
    pub async fn close(self) -> anyhow::Result<()> {
        Ok(self.db.close().await?)
    }

}

impl Deref for Database {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

/// Implementation of the connection trait for our database struct.
///
/// **NOTE**: We lack the implementations for the `mock` feature.
#[async_trait::async_trait]
impl ConnectionTrait for Database {
    fn get_database_backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        self.db.execute(stmt).await
    }

    async fn execute_unprepared(&self, sql: &str) -> Result<ExecResult, DbErr> {
        self.db.execute_unprepared(sql).await
    }

    async fn query_one(&self, stmt: Statement) -> Result<Option<QueryResult>, DbErr> {
        self.db.query_one(stmt).await
    }

    async fn query_all(&self, stmt: Statement) -> Result<Vec<QueryResult>, DbErr> {
        self.db.query_all(stmt).await
    }

    fn support_returning(&self) -> bool {
        self.db.support_returning()
    }
}

/// A trait to help working with database errors
pub trait DatabaseErrors {
    /// return `true` if the error is a duplicate key error
    fn is_duplicate(&self) -> bool;
}

impl DatabaseErrors for DbErr {
    fn is_duplicate(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }
}

/// Remove the password from the URL and replace it with `***`, if present.
///
/// If this is not a URL, or does not contain a password, this is a no-op.
pub(crate) fn strip_password(url: String) -> String {
    match Url::parse(&url) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => url,
    }
}
