// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure the service can produce
/// Inner variants are raised while talking to the provider or extracting
/// results; the handlers rewrap all of them into `InternalSearch` or
/// `InternalDetail` before they reach the caller.
#[derive(Error, Debug)]
pub enum RestaurantsError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    /// Provider answered with a non-success status other than ZERO_RESULTS
    #[error("{0}")]
    BadUpstreamRequest(String),

    /// Transport, HTTP or decoding failure talking to the provider
    #[error("{0}")]
    Provider(String),

    #[error("missing location data for place: {0}")]
    MissingLocationData(String),

    #[error("malformed place data: {0}")]
    MalformedPlace(String),

    #[error("Error searching restaurants: {0}")]
    InternalSearch(String),

    #[error("Error fetching restaurant details: {0}")]
    InternalDetail(String),
}

impl RestaurantsError {
    /// Collapse any error into the generic search failure
    /// The message of the original error is kept, its kind is not.
    pub fn into_search_error(self) -> Self {
        match self {
            RestaurantsError::InternalSearch(_) => self,
            other => RestaurantsError::InternalSearch(other.to_string()),
        }
    }

    /// Collapse any error into the generic detail failure
    pub fn into_detail_error(self) -> Self {
        match self {
            RestaurantsError::InternalDetail(_) => self,
            other => RestaurantsError::InternalDetail(other.to_string()),
        }
    }
}

/// Convert RestaurantsError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and `{ "detail": ... }` bodies
impl ResponseError for RestaurantsError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "detail": self.to_string()
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            RestaurantsError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RestaurantsError::BadUpstreamRequest(_) => StatusCode::BAD_REQUEST,
            RestaurantsError::Provider(_) => StatusCode::BAD_GATEWAY,
            RestaurantsError::Configuration(_)
            | RestaurantsError::MissingLocationData(_)
            | RestaurantsError::MalformedPlace(_)
            | RestaurantsError::InternalSearch(_)
            | RestaurantsError::InternalDetail(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_masking_keeps_message() {
        let err = RestaurantsError::BadUpstreamRequest("denied".to_string()).into_search_error();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error searching restaurants: denied");
    }

    #[test]
    fn test_detail_masking_is_idempotent() {
        let err = RestaurantsError::Provider("timeout".to_string())
            .into_detail_error()
            .into_detail_error();
        assert_eq!(err.to_string(), "Error fetching restaurant details: timeout");
    }

    #[test]
    fn test_validation_is_unprocessable() {
        let err = RestaurantsError::Validation("lat is required".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
