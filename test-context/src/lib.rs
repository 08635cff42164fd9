pub mod call;

use heroes_common::db::Database;
use test_context::AsyncTestContext;
use tracing::instrument;

/// A fresh, migrated database for each test.
pub struct HeroesContext {
    pub db: Database,
}

impl HeroesContext {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl AsyncTestContext for HeroesContext {
    #[instrument]
    #[allow(clippy::expect_used)]
    async fn setup() -> HeroesContext {
        let db = Database::in_memory()
            .await
            .expect("create an in-memory database");

        HeroesContext::new(db)
    }

    async fn teardown(self) {
        if let Err(err) = self.db.close().await {
            log::warn!("failed to close test database: {err}");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::{ConnectionTrait, Statement};
    use test_context::test_context;
    use test_log::test;

    #[test_context(HeroesContext)]
    #[test(tokio::test)]
    async fn starts_empty(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
        let rows = ctx
            .db
            .query_all(Statement::from_string(
                ctx.db.get_database_backend(),
                "SELECT id FROM hero",
            ))
            .await?;
        assert!(rows.is_empty());

        Ok(())
    }
}
