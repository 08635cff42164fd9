pub mod http;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Compress, Condition, Logger},
    App, Error,
};

#[derive(Default)]
pub struct AppOptions {
    pub cors: Option<Cors>,
    pub logger: Option<Logger>,
}

/// Build a new HTTP app in a consistent way.
///
/// Adding middleware to an HTTP app is tricky, as it requires to think about the order of adding.
/// This function should capture all the logic requires to properly set up a common application,
/// allowing some choices in the process.
pub fn new_app(
    options: AppOptions,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let AppOptions { cors, logger } = options;

    // The order of execution is last added becomes first to be executed. So if you read the
    // following lines, read them from end to start! Middleware for services will be executed after
    // the middleware here.
    App::new()
        // Handle CORS requests, this might finish early and not pass requests to the next entry
        .wrap(Condition::new(cors.is_some(), cors.unwrap_or_default()))
        // Compress everything
        .wrap(Compress::default())
        // First log the request, so that we know what happens (can't fail)
        .wrap(Condition::new(logger.is_some(), logger.unwrap_or_default()))
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::{get, http::StatusCode, HttpResponse, Responder};
    use test_log::test;

    #[get("/ping")]
    async fn ping() -> impl Responder {
        HttpResponse::Ok().body("pong")
    }

    #[test(actix_web::test)]
    async fn serves_with_middleware() {
        let app = actix_web::test::init_service(
            new_app(AppOptions {
                cors: Some(Cors::permissive()),
                logger: Some(Logger::default()),
            })
            .service(ping),
        )
        .await;

        let request = actix_web::test::TestRequest::get()
            .uri("/ping")
            .to_request();
        let response = actix_web::test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(actix_web::test::read_body(response).await, "pong");
    }
}
