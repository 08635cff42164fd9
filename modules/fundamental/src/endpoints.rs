use heroes_common::db::Database;

pub fn configure(svc: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    crate::hero::endpoints::configure(svc, db.clone());
    crate::power::endpoints::configure(svc, db.clone());
    crate::hero_power::endpoints::configure(svc, db);
}
