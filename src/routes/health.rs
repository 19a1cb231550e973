use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::env;

use crate::db::sessions::SessionStore;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    active_sessions: usize,
}

pub async fn health_check(store: web::Data<SessionStore>) -> impl Responder {
    let active_sessions = store.read().await.len();

    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        active_sessions,
    })
}
