use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::{MemoryStore, StoreStats};

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    #[serde(flatten)]
    pub store: StoreStats,
    pub timestamp: DateTime<Utc>,
}

/// Liveness check with store counts. Needs no session.
#[get("/health")]
pub async fn health(store: web::Data<MemoryStore>) -> impl Responder {
    HttpResponse::Ok().json(HealthReport {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        store: store.stats().await,
        timestamp: Utc::now(),
    })
}
