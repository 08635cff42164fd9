use heroes_common::db::Database;
use utoipa::openapi::{Info, InfoBuilder, OpenApi};

pub fn info() -> Info {
    InfoBuilder::new()
        .title("Heroes")
        .description(Some("Manage heroes, powers, and which hero has which power"))
        .version(env!("CARGO_PKG_VERSION"))
        .build()
}

/// Create the OpenAPI document, as served by the API server.
pub async fn create_openapi() -> anyhow::Result<OpenApi> {
    let db = Database::in_memory().await?;

    let mut openapi = heroes_module_fundamental::openapi(db);
    openapi.info = info();

    Ok(openapi)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn document() -> anyhow::Result<()> {
        let openapi = create_openapi().await?;

        assert_eq!(openapi.info.title, "Heroes");
        assert!(openapi.paths.paths.contains_key("/api/v1/hero-powers/{id}"));
        assert!(openapi.paths.paths.contains_key("/api/v1/powers/{id}/heroes"));

        Ok(())
    }
}
