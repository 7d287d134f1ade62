//! Route configuration

use crate::api::handlers;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health_check))
        .route("/initiate-call", web::post().to(handlers::initiate_call))
        .route("/call-report", web::get().to(handlers::call_report))
        .route("/update-call/{id}", web::put().to(handlers::update_call))
        .route("/delete-call/{id}", web::delete().to(handlers::delete_call));
}
