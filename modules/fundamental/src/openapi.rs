use actix_web::App;
use heroes_common::db::Database;
use utoipa_actix_web::AppExt;

/// Create the OpenAPI document of all endpoints, mounted below `/api`.
///
/// The database is only handed to the services, it is not accessed.
pub fn openapi(db: Database) -> utoipa::openapi::OpenApi {
    let (_, openapi) = App::new()
        .into_utoipa_app()
        .service(utoipa_actix_web::scope("/api").configure(|svc| crate::configure(svc, db)))
        .split_for_parts();

    openapi
}

#[cfg(test)]
mod test {
    use super::*;
    use heroes_test_context::HeroesContext;
    use test_context::test_context;
    use test_log::test;

    #[test_context(HeroesContext)]
    #[test(actix_web::test)]
    async fn all_operations_documented(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
        let openapi = openapi(ctx.db.clone());

        let mut operations = openapi
            .paths
            .paths
            .values()
            .flat_map(|item| {
                [
                    &item.get,
                    &item.post,
                    &item.patch,
                    &item.delete,
                ]
            })
            .flatten()
            .filter_map(|operation| operation.operation_id.clone())
            .collect::<Vec<_>>();
        operations.sort();

        assert_eq!(
            operations,
            vec![
                "assignPower",
                "createHero",
                "createPower",
                "deleteHero",
                "deleteHeroPower",
                "deletePower",
                "getHero",
                "getHeroPower",
                "getPower",
                "listHeroes",
                "listHeroesForPower",
                "listPowers",
                "listPowersForHero",
                "updateHero",
                "updatePower",
            ]
        );

        assert!(openapi.paths.paths.contains_key("/api/v1/heroes/{id}/powers"));
        assert!(openapi
            .components
            .as_ref()
            .is_some_and(|components| components.schemas.contains_key("HeroDetails")));

        Ok(())
    }
}
