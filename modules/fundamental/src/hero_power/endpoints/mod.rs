#[cfg(test)]
mod test;

use crate::{
    hero_power::{
        model::{AssignPower, HeroPowerDetails},
        service::HeroPowerService,
    },
    serializer::Kind,
    Error,
};
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use heroes_common::{db::Database, error::ErrorInformation};

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    let service = HeroPowerService::new(db);
    config
        .app_data(web::Data::new(service))
        .service(assign)
        .service(list_for_hero)
        .service(list_for_power)
        .service(get)
        .service(delete);
}

#[utoipa::path(
    tag = "hero-power",
    operation_id = "assignPower",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    request_body = AssignPower,
    responses(
        (status = 201, description = "The created hero power, with its hero and power", body = HeroPowerDetails),
        (status = 400, description = "Invalid strength", body = ErrorInformation),
        (status = 404, description = "The hero or the power was not found", body = ErrorInformation),
    ),
)]
#[post("/v1/heroes/{id}/powers")]
/// Assign a power to a hero
pub async fn assign(
    state: web::Data<HeroPowerService>,
    id: web::Path<i32>,
    web::Json(input): web::Json<AssignPower>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Created().json(state.assign_power(*id, input).await?))
}

#[utoipa::path(
    tag = "hero-power",
    operation_id = "listPowersForHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    responses(
        (status = 200, description = "The hero powers of the hero, each with its power", body = Vec<HeroPowerDetails>),
        (status = 404, description = "Matching hero not found", body = ErrorInformation),
    ),
)]
#[get("/v1/heroes/{id}/powers")]
/// List the powers of a hero
pub async fn list_for_hero(
    state: web::Data<HeroPowerService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(state.list_powers_for_hero(*id).await?))
}

#[utoipa::path(
    tag = "hero-power",
    operation_id = "listHeroesForPower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "The hero powers of the power, each with its hero", body = Vec<HeroPowerDetails>),
        (status = 404, description = "Matching power not found", body = ErrorInformation),
    ),
)]
#[get("/v1/powers/{id}/heroes")]
/// List the heroes having a power
pub async fn list_for_power(
    state: web::Data<HeroPowerService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(state.list_heroes_for_power(*id).await?))
}

#[utoipa::path(
    tag = "hero-power",
    operation_id = "getHeroPower",
    params(
        ("id", Path, description = "ID of the hero power")
    ),
    responses(
        (status = 200, description = "Matching hero power, with its hero and power", body = HeroPowerDetails),
        (status = 404, description = "Matching hero power not found", body = ErrorInformation),
    ),
)]
#[get("/v1/hero-powers/{id}")]
/// Retrieve a hero power
pub async fn get(
    state: web::Data<HeroPowerService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match state.fetch_hero_power(*id).await? {
        Some(hero_power) => Ok(HttpResponse::Ok().json(hero_power)),
        None => Err(Error::not_found(Kind::HeroPower, *id).into()),
    }
}

#[utoipa::path(
    tag = "hero-power",
    operation_id = "deleteHeroPower",
    params(
        ("id", Path, description = "ID of the hero power")
    ),
    responses(
        (status = 204, description = "The hero power was deleted"),
        (status = 404, description = "Matching hero power not found", body = ErrorInformation),
    ),
)]
#[delete("/v1/hero-powers/{id}")]
/// Remove a power from a hero
pub async fn delete(
    state: web::Data<HeroPowerService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match state.delete_hero_power(*id).await? {
        true => Ok(HttpResponse::NoContent().finish()),
        false => Err(Error::not_found(Kind::HeroPower, *id).into()),
    }
}
