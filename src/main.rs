mod api;
mod config;
mod database;
mod middleware;
mod models;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::database::{MongoDB, MongoUserStore, UserStore};

fn build_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    log::info!("🚀 Starting User Service...");
    log::info!("📊 Database: {} / {}", config.mongodb_database, config.mongodb_collection);

    // Sem banco não sobe: falha de conexão ou de ping encerra o processo
    let db = MongoDB::new(&config).await.map_err(|e| {
        log::error!("❌ Failed to connect to MongoDB: {}", e);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    log::info!("✅ MongoDB connected successfully");

    let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::new(
        db.clone(),
        &config.mongodb_collection,
        config.operation_timeout,
    ));
    let store_data = web::Data::from(store);

    let bind_address = config.bind_address();
    let cors_allowed_origins = config.cors_allowed_origins.clone();

    log::info!("🌐 Server starting on {}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);

    HttpServer::new(move || {
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(build_cors(&cors_allowed_origins))
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .route("/health", web::get().to(api::health::health_check))
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            .configure(api::users::configure)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    log::info!("👋 Server stopped, closing MongoDB connections");
    db.client().clone().shutdown().await;

    Ok(())
}
