use actix_web::{get, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::database::Database;

#[get("/health")]
pub async fn health(db: web::Data<Arc<Database>>) -> impl Responder {
    if db.is_healthy().await {
        HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected"
        }))
    } else {
        HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "unhealthy",
            "database": "disconnected"
        }))
    }
}
