// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Handle communication with Google Places API for nearby search and place details

use crate::errors::RestaurantsError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Place type sent with every nearby search
pub const RESTAURANT_TYPE: &str = "restaurant";

/// Fields requested from Place Details
pub const DETAIL_FIELDS: &[&str] = &[
    "name",
    "formatted_address",
    "geometry",
    "rating",
    "price_level",
    "types",
    "user_ratings_total",
    "formatted_phone_number",
    "website",
    "opening_hours",
    "photos",
];

/// Capability set the restaurant handlers need from the provider
/// DOCUMENTATION: Implemented by `GooglePlacesClient` in production and by
/// an in-memory fake in tests. Implementations must be safe to share
/// between concurrent requests.
#[async_trait]
pub trait PlacesGateway: Send + Sync {
    /// Issue a nearby search and return the raw provider payload
    async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<NearbySearchResponse, RestaurantsError>;

    /// Fetch details for one place, restricted to `fields`
    async fn place_detail(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<PlaceDetailsResponse, RestaurantsError>;
}

/// Parameters of a nearby search
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearchRequest {
    /// (latitude, longitude)
    pub location: (f64, f64),
    /// Radius in meters, forwarded as given
    pub radius: i64,
    pub place_type: String,
    /// Free-text match against provider-indexed fields
    pub keyword: Option<String>,
}

impl NearbySearchRequest {
    /// Nearby search restricted to restaurants
    pub fn restaurants(location: (f64, f64), radius: i64, keyword: Option<&str>) -> Self {
        Self {
            location,
            radius,
            place_type: RESTAURANT_TYPE.to_string(),
            keyword: keyword.map(str::to_string),
        }
    }
}

/// Response from Google Places Nearby Search
/// DOCUMENTATION: Parsed response from Google Places API
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NearbySearchResponse {
    /// Status of the API call
    pub status: Option<String>,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
    /// Results array from API
    #[serde(default)]
    pub results: Vec<GooglePlace>,
}

/// Response from Google Place Details
/// A missing `result` wrapper decodes as an empty place.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlaceDetailsResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub result: GooglePlace,
}

/// Status reported in the body of a Places response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    Ok,
    ZeroResults,
    RequestDenied,
    InvalidRequest,
    OverQueryLimit,
    NotFound,
    Other(String),
}

impl ProviderStatus {
    /// Parse the status field; absence is reported as `Other("UNKNOWN")`
    pub fn parse(status: Option<&str>) -> Self {
        match status {
            Some("OK") => ProviderStatus::Ok,
            Some("ZERO_RESULTS") => ProviderStatus::ZeroResults,
            Some("REQUEST_DENIED") => ProviderStatus::RequestDenied,
            Some("INVALID_REQUEST") => ProviderStatus::InvalidRequest,
            Some("OVER_QUERY_LIMIT") => ProviderStatus::OverQueryLimit,
            Some("NOT_FOUND") => ProviderStatus::NotFound,
            Some(other) => ProviderStatus::Other(other.to_string()),
            None => ProviderStatus::Other("UNKNOWN".to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProviderStatus::Ok | ProviderStatus::ZeroResults)
    }
}

impl fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProviderStatus::Ok => "OK",
            ProviderStatus::ZeroResults => "ZERO_RESULTS",
            ProviderStatus::RequestDenied => "REQUEST_DENIED",
            ProviderStatus::InvalidRequest => "INVALID_REQUEST",
            ProviderStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            ProviderStatus::NotFound => "NOT_FOUND",
            ProviderStatus::Other(other) => other,
        };
        f.write_str(s)
    }
}

/// Individual place from Google Places API
/// DOCUMENTATION: Every field is optional on the wire; required fields are
/// enforced when the place is converted into a response model.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GooglePlace {
    /// Google's unique place identifier
    pub place_id: Option<String>,
    /// Place name
    pub name: Option<String>,
    /// Vicinity (short address, from Nearby Search)
    pub vicinity: Option<String>,
    /// Formatted address (detailed, from Place Details)
    pub formatted_address: Option<String>,
    /// Geographic location
    pub geometry: Option<GoogleGeometry>,
    /// Rating (0-5)
    pub rating: Option<f64>,
    /// Price level (0-4: free to very expensive)
    pub price_level: Option<i32>,
    /// Place types array (e.g., ["restaurant", "food", "point_of_interest"])
    #[serde(default)]
    pub types: Vec<String>,
    /// Number of user ratings
    pub user_ratings_total: Option<u32>,
    /// Phone number (formatted for local use)
    pub formatted_phone_number: Option<String>,
    /// Website URL
    pub website: Option<String>,
    /// Opening hours, kept as returned
    pub opening_hours: Option<Value>,
    pub photos: Option<Vec<GooglePhoto>>,
}

impl GooglePlace {
    /// (lat, lng) if the provider supplied coordinates
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.geometry
            .as_ref()
            .and_then(|g| g.location.as_ref())
            .and_then(|loc| loc.lat.zip(loc.lng))
    }
}

/// Geographic location from Google
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleGeometry {
    pub location: Option<GoogleLocation>,
}

/// Coordinates from Google
/// A half-filled location decodes and is rejected at extraction.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Photo from Google Places
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GooglePhoto {
    /// Photo reference (used to fetch actual photo)
    pub photo_reference: Option<String>,
}

/// Google Places API client
/// DOCUMENTATION: Handles authentication and API calls to Google Places.
/// The inner `reqwest::Client` pools connections and is cheap to share.
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key
    api_key: String,
    /// Base URL for Google Places API
    base_url: String,
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `url` with `params` and decode the JSON body
    async fn get_json<T>(&self, url: &str, params: &[(&str, String)]) -> Result<T, RestaurantsError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Places API request failed: {}", e);
                RestaurantsError::Provider(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Google Places API error {}: {}", status, body);
            return Err(RestaurantsError::Provider(format!(
                "API error {}: {}",
                status, body
            )));
        }

        response.json::<T>().await.map_err(|e| {
            log::error!("Failed to parse Google Places response: {}", e);
            RestaurantsError::Provider(format!("Parse error: {}", e))
        })
    }
}

#[async_trait]
impl PlacesGateway for GooglePlacesClient {
    async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<NearbySearchResponse, RestaurantsError> {
        let url = format!("{}/nearbysearch/json", self.base_url);
        let (latitude, longitude) = request.location;

        let mut params = vec![
            ("location", format!("{},{}", latitude, longitude)),
            ("radius", request.radius.to_string()),
            ("type", request.place_type.clone()),
        ];
        if let Some(kw) = &request.keyword {
            params.push(("keyword", kw.clone()));
        }

        log::debug!(
            "Google Places nearby search: lat={}, lng={}, radius={}, keyword={:?}",
            latitude,
            longitude,
            request.radius,
            request.keyword
        );

        self.get_json(&url, &params).await
    }

    async fn place_detail(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<PlaceDetailsResponse, RestaurantsError> {
        let url = format!("{}/details/json", self.base_url);
        let params = [
            ("place_id", place_id.to_string()),
            ("fields", fields.join(",")),
        ];

        log::debug!("Google Places details lookup: place_id={}", place_id);

        self.get_json(&url, &params).await
    }
}
