
use crate::{
    hero::{
        model::{HeroDetails, HeroInput},
        service::HeroService,
    },
    serializer::Kind,
    Error,
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use heroes_common::{db::Database, error::ErrorInformation};

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    let service = HeroService::new(db);
    config
        .app_data(web::Data::new(service))
        .service(all)
        .service(create)
        .service(get)
        .service(update)
        .service(delete);
}

#[utoipa::path(
    tag = "hero",
    operation_id = "listHeroes",
    responses(
        (status = 200, description = "All heroes, with their powers", body = Vec<HeroDetails>),
    ),
)]
#[get("/v1/heroes")]
/// List heroes
pub async fn all(state: web::Data<HeroService>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(state.fetch_heroes().await?))
}

#[utoipa::path(
    tag = "hero",
    operation_id = "createHero",
    request_body = HeroInput,
    responses(
        (status = 201, description = "The created hero", body = HeroDetails),
        (status = 400, description = "Invalid field value", body = ErrorInformation),
    ),
)]
#[post("/v1/heroes")]
/// Create a hero
pub async fn create(
    state: web::Data<HeroService>,
    web::Json(input): web::Json<HeroInput>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Created().json(state.create_hero(input).await?))
}

#[utoipa::path(
    tag = "hero",
    operation_id = "getHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    responses(
        (status = 200, description = "Matching hero", body = HeroDetails),
        (status = 404, description = "Matching hero not found", body = ErrorInformation),
    ),
)]
#[get("/v1/heroes/{id}")]
/// Retrieve a hero, with its powers
pub async fn get(
    state: web::Data<HeroService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match state.fetch_hero(*id).await? {
        Some(hero) => Ok(HttpResponse::Ok().json(hero)),
        None => Err(Error::not_found(Kind::Hero, *id).into()),
    }
}

#[utoipa::path(
    tag = "hero",
    operation_id = "updateHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    request_body = HeroInput,
    responses(
        (status = 200, description = "The updated hero", body = HeroDetails),
        (status = 400, description = "Invalid field value", body = ErrorInformation),
        (status = 404, description = "Matching hero not found", body = ErrorInformation),
    ),
)]
#[patch("/v1/heroes/{id}")]
/// Update the provided fields of a hero
pub async fn update(
    state: web::Data<HeroService>,
    id: web::Path<i32>,
    web::Json(input): web::Json<HeroInput>,
) -> actix_web::Result<impl Responder> {
    match state.update_hero(*id, input).await? {
        Some(hero) => Ok(HttpResponse::Ok().json(hero)),
        None => Err(Error::not_found(Kind::Hero, *id).into()),
    }
}

#[utoipa::path(
    tag = "hero",
    operation_id = "deleteHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    responses(
        (status = 204, description = "The hero and its hero powers were deleted"),
        (status = 404, description = "Matching hero not found", body = ErrorInformation),
    ),
)]
#[delete("/v1/heroes/{id}")]
/// Delete a hero, together with its hero powers
pub async fn delete(
    state: web::Data<HeroService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match state.delete_hero(*id).await? {
        true => Ok(HttpResponse::NoContent().finish()),
        false => Err(Error::not_found(Kind::Hero, *id).into()),
    }
}
