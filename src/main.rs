// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, places client, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::{cors_policy, Config};
use dotenv::dotenv;
use services::{GooglePlacesClient, PlacesGateway};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize logging (before config, so config errors are logged)
    if std::env::var("RUST_LOG").is_err() {
        let log_level = std::env::var("LOG_LEVEL")
            .ok()
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| "info,actix_web=info".to_string());
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    // 3. Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!("Starting restaurant finder API...");
    log::info!("Environment: {}", config.environment);
    log::info!("Log level: {}", config.log_level);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Places provider client, shared by all workers
    let gateway: Arc<dyn PlacesGateway> = Arc::new(GooglePlacesClient::new(
        config.google_places_api_key.clone(),
        config.google_places_base_url.clone(),
    ));
    log::info!("Places provider: {}", config.google_places_base_url);

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(gateway.clone()))
            // Middleware
            .wrap(cors_policy())
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::restaurants_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
