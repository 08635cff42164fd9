
use crate::{
    power::{
        model::{PowerDetails, PowerInput},
        service::PowerService,
    },
    serializer::Kind,
    Error,
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use heroes_common::{db::Database, error::ErrorInformation};

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    let service = PowerService::new(db);
    config
        .app_data(web::Data::new(service))
        .service(all)
        .service(create)
        .service(get)
        .service(update)
        .service(delete);
}

#[utoipa::path(
    tag = "power",
    operation_id = "listPowers",
    responses(
        (status = 200, description = "All powers, with their heroes", body = Vec<PowerDetails>),
    ),
)]
#[get("/v1/powers")]
/// List powers
pub async fn all(state: web::Data<PowerService>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(state.fetch_powers().await?))
}

#[utoipa::path(
    tag = "power",
    operation_id = "createPower",
    request_body = PowerInput,
    responses(
        (status = 201, description = "The created power", body = PowerDetails),
        (status = 400, description = "Invalid field value, or the name is already taken", body = ErrorInformation),
    ),
)]
#[post("/v1/powers")]
/// Create a power
pub async fn create(
    state: web::Data<PowerService>,
    web::Json(input): web::Json<PowerInput>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Created().json(state.create_power(input).await?))
}

#[utoipa::path(
    tag = "power",
    operation_id = "getPower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "Matching power", body = PowerDetails),
        (status = 404, description = "Matching power not found", body = ErrorInformation),
    ),
)]
#[get("/v1/powers/{id}")]
/// Retrieve a power, with its heroes
pub async fn get(
    state: web::Data<PowerService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match state.fetch_power(*id).await? {
        Some(power) => Ok(HttpResponse::Ok().json(power)),
        None => Err(Error::not_found(Kind::Power, *id).into()),
    }
}

#[utoipa::path(
    tag = "power",
    operation_id = "updatePower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    request_body = PowerInput,
    responses(
        (status = 200, description = "The updated power", body = PowerDetails),
        (status = 400, description = "Invalid field value, or the name is already taken", body = ErrorInformation),
        (status = 404, description = "Matching power not found", body = ErrorInformation),
    ),
)]
#[patch("/v1/powers/{id}")]
/// Update the provided fields of a power
pub async fn update(
    state: web::Data<PowerService>,
    id: web::Path<i32>,
    web::Json(input): web::Json<PowerInput>,
) -> actix_web::Result<impl Responder> {
    match state.update_power(*id, input).await? {
        Some(power) => Ok(HttpResponse::Ok().json(power)),
        None => Err(Error::not_found(Kind::Power, *id).into()),
    }
}

#[utoipa::path(
    tag = "power",
    operation_id = "deletePower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 204, description = "The power and its hero powers were deleted"),
        (status = 404, description = "Matching power not found", body = ErrorInformation),
    ),
)]
#[delete("/v1/powers/{id}")]
/// Delete a power, together with its hero powers
pub async fn delete(
    state: web::Data<PowerService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match state.delete_power(*id).await? {
        true => Ok(HttpResponse::NoContent().finish()),
        false => Err(Error::not_found(Kind::Power, *id).into()),
    }
}
