// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::errors::RestaurantsError;
use dotenv::dotenv;
use std::env;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Places API Key (required)
    pub google_places_api_key: String,

    /// Base URL of the places provider
    pub google_places_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup; fails when the API key is absent
    pub fn from_env() -> Result<Self, RestaurantsError> {
        dotenv().ok();

        let google_places_api_key = env::var("GOOGLE_PLACES_API_KEY").map_err(|_| {
            RestaurantsError::Configuration(
                "GOOGLE_PLACES_API_KEY environment variable is required".to_string(),
            )
        })?;

        let config = Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            google_places_api_key,

            google_places_base_url: env::var("GOOGLE_PLACES_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PLACES_BASE_URL.to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), RestaurantsError> {
        if self.google_places_api_key.trim().is_empty() {
            return Err(RestaurantsError::Configuration(
                "GOOGLE_PLACES_API_KEY environment variable is required".to_string(),
            ));
        }

        if self.server_address.is_empty() {
            return Err(RestaurantsError::Configuration(
                "SERVER_ADDRESS must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
