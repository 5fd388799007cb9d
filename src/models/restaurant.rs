// src/models/restaurant.rs
// DOCUMENTATION: Request and response models for restaurant endpoints
// PURPOSE: Query parameters of the search endpoint and the JSON shapes returned to clients

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Default search radius in meters (~3 miles)
pub const DEFAULT_RADIUS_METERS: i64 = 5000;

fn default_radius() -> i64 {
    DEFAULT_RADIUS_METERS
}

/// Query parameters for GET /restaurants
/// DOCUMENTATION: `lat` and `lng` are required, everything else is optional.
/// Price bounds are validated individually; `min_price > max_price` is
/// accepted and simply yields an empty result.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchQuery {
    /// Latitude of search center
    pub lat: f64,

    /// Longitude of search center
    pub lng: f64,

    /// Search radius in meters, not range-checked here
    #[serde(default = "default_radius")]
    pub radius: i64,

    /// Minimum price level (0-4)
    #[validate(range(min = 0, max = 4))]
    pub min_price: Option<i32>,

    /// Maximum price level (0-4)
    #[validate(range(min = 0, max = 4))]
    pub max_price: Option<i32>,

    /// Cuisine keyword (e.g., "italian"), matched by the provider
    pub cuisine_type: Option<String>,
}

impl SearchQuery {
    pub fn center(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Cuisine keyword as sent by the caller; an empty value is not forwarded
    pub fn keyword(&self) -> Option<&str> {
        self.cuisine_type.as_deref().filter(|kw| !kw.is_empty())
    }
}

/// Restaurant entry in a search listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub rating: Option<f64>,
    /// 0 (free) to 4 (very expensive)
    pub price_level: Option<i32>,
    pub types: Vec<String>,
    pub user_ratings_total: Option<u32>,
    /// First photo reference only; never an empty list
    pub photos: Option<Vec<String>>,
}

/// Full restaurant record returned by GET /restaurants/{place_id}
/// DOCUMENTATION: Summary fields plus contact data and opening hours.
/// `photos` holds up to five references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub summary: RestaurantSummary,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    /// Provider structure passed through verbatim
    pub opening_hours: Option<Value>,
    /// Same value as `website`
    pub menu_url: Option<String>,
}

/// Response for GET /restaurants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub restaurants: Vec<RestaurantSummary>,
    pub count: usize,
}

impl SearchResponse {
    pub fn new(restaurants: Vec<RestaurantSummary>) -> Self {
        let count = restaurants.len();
        Self { restaurants, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(min_price: Option<i32>, max_price: Option<i32>) -> SearchQuery {
        SearchQuery {
            lat: 37.7749,
            lng: -122.4194,
            radius: DEFAULT_RADIUS_METERS,
            min_price,
            max_price,
            cuisine_type: None,
        }
    }

    #[test]
    fn test_price_bounds_validation() {
        assert!(query(Some(0), Some(4)).validate().is_ok());
        assert!(query(Some(5), None).validate().is_err());
        assert!(query(None, Some(-1)).validate().is_err());
        // Inverted bounds are not cross-validated
        assert!(query(Some(3), Some(1)).validate().is_ok());
    }

    #[test]
    fn test_keyword_forwarded_verbatim() {
        let mut q = query(None, None);
        q.cuisine_type = Some(String::new());
        assert_eq!(q.keyword(), None);
        q.cuisine_type = Some("  ".to_string());
        assert_eq!(q.keyword(), Some("  "));
        q.cuisine_type = Some(" italian ".to_string());
        assert_eq!(q.keyword(), Some(" italian "));
    }

    #[test]
    fn test_detail_serializes_flat() {
        let detail = RestaurantDetail {
            summary: RestaurantSummary {
                place_id: "p1".to_string(),
                name: "Test Restaurant".to_string(),
                address: None,
                lat: 1.0,
                lng: 2.0,
                rating: None,
                price_level: None,
                types: vec![],
                user_ratings_total: None,
                photos: None,
            },
            phone_number: None,
            website: Some("https://example.com".to_string()),
            opening_hours: None,
            menu_url: Some("https://example.com".to_string()),
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["place_id"], "p1");
        assert_eq!(value["lat"], 1.0);
        assert_eq!(value["menu_url"], "https://example.com");
        assert!(value["price_level"].is_null());
        assert!(value.get("summary").is_none());
    }
}
