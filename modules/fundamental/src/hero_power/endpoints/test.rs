use crate::test::caller;
use actix_http::StatusCode;
use actix_web::test::TestRequest;
use heroes_test_context::{call::CallService, HeroesContext};
use serde_json::{json, Value};
use test_context::test_context;
use test_log::test;

/// Create a power and a hero through the API, returning their ids.
async fn setup(app: &impl CallService) -> (i64, i64) {
    let request = TestRequest::post()
        .uri("/api/v1/powers")
        .set_json(json!({"name": "Flight", "description": "Can fly through the air"}))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let power: Value = actix_web::test::read_body_json(response).await;

    let request = TestRequest::post()
        .uri("/api/v1/heroes")
        .set_json(json!({"name": "Clark Kent", "super_name": "Superman"}))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let hero: Value = actix_web::test::read_body_json(response).await;

    (
        hero["id"].as_i64().unwrap_or_default(),
        power["id"].as_i64().unwrap_or_default(),
    )
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn superman_flies(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let (hero, power) = setup(&app).await;

    let request = TestRequest::post()
        .uri(&format!("/api/v1/heroes/{hero}/powers"))
        .set_json(json!({"power_id": power, "strength": "Strong"}))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let assigned: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(assigned["hero_id"], hero);
    assert_eq!(assigned["power_id"], power);
    assert_eq!(assigned["strength"], "Strong");
    assert_eq!(assigned["hero"]["super_name"], "Superman");
    assert_eq!(assigned["power"]["name"], "Flight");
    let id = assigned["id"].as_i64().expect("must have an id");

    let request = TestRequest::get()
        .uri(&format!("/api/v1/heroes/{hero}/powers"))
        .to_request();
    let listed: Value = app.call_and_read_body_json(request).await;
    assert_eq!(
        listed,
        json!([{
            "id": id,
            "strength": "Strong",
            "hero_id": hero,
            "power_id": power,
            "power": {
                "id": power,
                "name": "Flight",
                "description": "Can fly through the air",
            },
        }])
    );

    let request = TestRequest::get()
        .uri(&format!("/api/v1/powers/{power}/heroes"))
        .to_request();
    let listed: Value = app.call_and_read_body_json(request).await;
    assert_eq!(listed[0]["hero"]["name"], "Clark Kent");
    assert!(listed[0].get("power").is_none());

    // the hero shows its powers, but never itself again
    let request = TestRequest::get()
        .uri(&format!("/api/v1/heroes/{hero}"))
        .to_request();
    let fetched: Value = app.call_and_read_body_json(request).await;
    assert_eq!(fetched["hero_powers"][0]["power"]["name"], "Flight");
    assert!(fetched["hero_powers"][0].get("hero").is_none());

    let request = TestRequest::get()
        .uri(&format!("/api/v1/hero-powers/{id}"))
        .to_request();
    let fetched: Value = app.call_and_read_body_json(request).await;
    assert_eq!(fetched, assigned);

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn deadly_is_no_strength(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let (hero, power) = setup(&app).await;

    let request = TestRequest::post()
        .uri(&format!("/api/v1/heroes/{hero}/powers"))
        .set_json(json!({"power_id": power, "strength": "Deadly"}))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(error["error"], "ValidationError");
    assert_eq!(error["details"], "strength");

    let request = TestRequest::get()
        .uri(&format!("/api/v1/heroes/{hero}/powers"))
        .to_request();
    let listed: Value = app.call_and_read_body_json(request).await;
    assert_eq!(listed, json!([]));

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn missing_references(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let (hero, power) = setup(&app).await;

    for (hero, power) in [(hero + 1, power), (hero, power + 1)] {
        let request = TestRequest::post()
            .uri(&format!("/api/v1/heroes/{hero}/powers"))
            .set_json(json!({"power_id": power, "strength": "Weak"}))
            .to_request();
        let response = app.call_service(request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let request = TestRequest::get()
        .uri(&format!("/api/v1/heroes/{}/powers", hero + 1))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = TestRequest::get()
        .uri(&format!("/api/v1/powers/{}/heroes", power + 1))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn delete_hero_cascades(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let (hero, power) = setup(&app).await;

    let request = TestRequest::post()
        .uri(&format!("/api/v1/heroes/{hero}/powers"))
        .set_json(json!({"power_id": power, "strength": "Average"}))
        .to_request();
    let assigned: Value = app.call_and_read_body_json(request).await;
    let id = &assigned["id"];

    let request = TestRequest::delete()
        .uri(&format!("/api/v1/heroes/{hero}"))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = TestRequest::get()
        .uri(&format!("/api/v1/hero-powers/{id}"))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = TestRequest::get()
        .uri(&format!("/api/v1/heroes/{hero}/powers"))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = TestRequest::get()
        .uri(&format!("/api/v1/powers/{power}"))
        .to_request();
    let fetched: Value = app.call_and_read_body_json(request).await;
    assert_eq!(fetched["hero_powers"], json!([]));

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn delete_hero_power(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let (hero, power) = setup(&app).await;

    let request = TestRequest::post()
        .uri(&format!("/api/v1/heroes/{hero}/powers"))
        .set_json(json!({"power_id": power, "strength": "Weak"}))
        .to_request();
    let assigned: Value = app.call_and_read_body_json(request).await;
    let id = &assigned["id"];

    let request = TestRequest::delete()
        .uri(&format!("/api/v1/hero-powers/{id}"))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = TestRequest::delete()
        .uri(&format!("/api/v1/hero-powers/{id}"))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = TestRequest::get()
        .uri(&format!("/api/v1/heroes/{hero}"))
        .to_request();
    let fetched: Value = app.call_and_read_body_json(request).await;
    assert_eq!(fetched["hero_powers"], json!([]));

    Ok(())
}
