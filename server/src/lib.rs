pub mod openapi;

use heroes_common::{
    config::Database,
    db::{self, CreationMode},
};
use heroes_infrastructure::app::http::{HttpServerBuilder, HttpServerConfig};
use std::process::ExitCode;
use utoipa_actix_web::service_config::ServiceConfig;

/// Run the API server
#[derive(clap::Args, Debug, Clone)]
pub struct Run {
    /// The database creation mode
    #[arg(long, env, value_enum, default_value_t = CreationMode::Default)]
    pub creation: CreationMode,

    #[command(flatten)]
    pub database: Database,

    #[command(flatten)]
    pub http: HttpServerConfig,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        log::info!("Database: {}", self.database);

        let db = db::Database::with_external_config(&self.database, self.creation).await?;

        HttpServerBuilder::try_from(self.http)?
            .openapi_info(openapi::info())
            .configure(move |svc| configure(svc, db.clone()))
            .run()
            .await?;

        Ok(ExitCode::SUCCESS)
    }
}

/// Mount all modules below `/api`.
pub fn configure(svc: &mut ServiceConfig, db: db::Database) {
    svc.service(
        utoipa_actix_web::scope("/api")
            .configure(|svc| heroes_module_fundamental::configure(svc, db)),
    );
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_http::StatusCode;
    use actix_web::{test::TestRequest, App};
    use heroes_infrastructure::app::http::ApplyOpenApi;
    use heroes_test_context::{call::CallService, HeroesContext};
    use serde_json::{json, Value};
    use test_context::test_context;
    use test_log::test;
    use utoipa_actix_web::AppExt;

    #[test_context(HeroesContext)]
    #[test(actix_web::test)]
    async fn serves_api_and_docs(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
        let app = actix_web::test::init_service(
            App::new()
                .into_utoipa_app()
                .configure(|svc| configure(svc, ctx.db.clone()))
                .apply_openapi(Some(openapi::info())),
        )
        .await;

        let request = TestRequest::post()
            .uri("/api/v1/powers")
            .set_json(json!({"name": "Flight", "description": "Can fly through the air"}))
            .to_request();
        let response = app.call_service(request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let request = TestRequest::get().uri("/api/v1/powers").to_request();
        let powers: Value = app.call_and_read_body_json(request).await;
        assert_eq!(powers[0]["name"], "Flight");

        let request = TestRequest::get().uri("/openapi.json").to_request();
        let doc: Value = app.call_and_read_body_json(request).await;
        assert_eq!(doc["info"]["title"], "Heroes");
        assert!(doc["paths"]["/api/v1/heroes/{id}"]["patch"].is_object());

        let request = TestRequest::get().uri("/openapi/").to_request();
        let response = app.call_service(request).await;
        assert_eq!(response.status(), StatusCode::OK);

        Ok(())
    }
}
