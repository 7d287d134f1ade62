//! Call Log Service server
//!
//! Binds the HTTP surface to a SQLite-backed call record store.

use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use call_log_service::api::routes;
use call_log_service::config::Config;
use call_log_service::database::{create_pool, init_schema};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("call_log_service=info,actix_web=info,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting Call Log Service v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().expect("Failed to load configuration");

    let pool = create_pool(&config.database_url, None)
        .await
        .expect("Failed to create database pool");

    init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    let bind_addr = format!("{}:{}", config.host, config.port);
    info!(
        "Starting HTTP server on {} with {} workers",
        bind_addr, config.workers
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                let error_message = err.to_string();
                actix_web::error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(serde_json::json!({
                        "success": false,
                        "error": "invalid_query",
                        "message": error_message,
                    })),
                )
                .into()
            }))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let error_message = err.to_string();
                actix_web::error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(serde_json::json!({
                        "success": false,
                        "error": "invalid_json",
                        "message": error_message,
                    })),
                )
                .into()
            }))
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %Dms"))
            .wrap(middleware::NormalizePath::trim())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(routes::configure)
    })
    .workers(config.workers)
    .bind(&bind_addr)?
    .run()
    .await
}
