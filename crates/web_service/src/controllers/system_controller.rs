use actix_web::{web, HttpResponse, Responder};

use crate::models::StatusResponse;

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse::ok())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health_check)));
}
