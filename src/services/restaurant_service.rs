// src/services/restaurant_service.rs
// DOCUMENTATION: Business logic for restaurant search and details
// PURPOSE: Translate queries into provider calls, filter results and shape responses

use crate::errors::RestaurantsError;
use crate::models::{RestaurantDetail, RestaurantSummary, SearchQuery, SearchResponse};
use crate::services::google_places_client::{
    GooglePlace, NearbySearchRequest, NearbySearchResponse, PlacesGateway, ProviderStatus,
    DETAIL_FIELDS,
};

/// Maximum number of photo references returned by the detail endpoint
pub const MAX_DETAIL_PHOTOS: usize = 5;

pub struct RestaurantService;

impl RestaurantService {
    /// Search restaurants around a point
    /// DOCUMENTATION: Every failure, including a rejected provider request,
    /// is reported as `InternalSearch`. The upstream classification is
    /// computed by `check_search_status` but does not survive this boundary.
    pub async fn search_restaurants(
        gateway: &dyn PlacesGateway,
        query: &SearchQuery,
    ) -> Result<SearchResponse, RestaurantsError> {
        Self::run_search(gateway, query).await.map_err(|e| {
            log::error!("Restaurant search failed: {}", e);
            e.into_search_error()
        })
    }

    async fn run_search(
        gateway: &dyn PlacesGateway,
        query: &SearchQuery,
    ) -> Result<SearchResponse, RestaurantsError> {
        let request = NearbySearchRequest::restaurants(query.center(), query.radius, query.keyword());
        let response = gateway.nearby_search(&request).await?;

        Self::check_search_status(&response)?;

        let mut restaurants = Vec::with_capacity(response.results.len());
        for place in &response.results {
            if !Self::passes_price_filter(place.price_level, query.min_price, query.max_price) {
                continue;
            }
            restaurants.push(Self::summary_from_place(place)?);
        }

        log::info!(
            "Restaurant search returned {} of {} provider results",
            restaurants.len(),
            response.results.len()
        );

        Ok(SearchResponse::new(restaurants))
    }

    /// Fetch one restaurant by provider place id
    /// DOCUMENTATION: Failures are reported as `InternalDetail`.
    pub async fn get_restaurant(
        gateway: &dyn PlacesGateway,
        place_id: &str,
    ) -> Result<RestaurantDetail, RestaurantsError> {
        Self::run_detail(gateway, place_id).await.map_err(|e| {
            log::error!("Restaurant details failed for {}: {}", place_id, e);
            e.into_detail_error()
        })
    }

    async fn run_detail(
        gateway: &dyn PlacesGateway,
        place_id: &str,
    ) -> Result<RestaurantDetail, RestaurantsError> {
        let response = gateway.place_detail(place_id, DETAIL_FIELDS).await?;
        if let Some(status) = &response.status {
            log::debug!("Place details status for {}: {}", place_id, status);
        }
        Self::detail_from_place(place_id, &response.result)
    }

    /// Accept OK and ZERO_RESULTS, reject everything else
    pub fn check_search_status(response: &NearbySearchResponse) -> Result<(), RestaurantsError> {
        let status = ProviderStatus::parse(response.status.as_deref());
        if status.is_success() {
            return Ok(());
        }

        let mut message = response
            .error_message
            .clone()
            .unwrap_or_else(|| format!("provider error: {}", status));

        match status {
            ProviderStatus::RequestDenied => {
                message.push_str(" - Check your API key and ensure Places API is enabled")
            }
            ProviderStatus::InvalidRequest => message.push_str(" - Check your request parameters"),
            _ => {}
        }

        log::warn!("Google Places search rejected with status {}: {}", status, message);
        Err(RestaurantsError::BadUpstreamRequest(message))
    }

    /// Inclusive price bounds; an unknown price fails any bound that is set
    pub fn passes_price_filter(
        price_level: Option<i32>,
        min_price: Option<i32>,
        max_price: Option<i32>,
    ) -> bool {
        if let Some(min) = min_price {
            match price_level {
                Some(level) if level >= min => {}
                _ => return false,
            }
        }

        if let Some(max) = max_price {
            match price_level {
                Some(level) if level <= max => {}
                _ => return false,
            }
        }

        true
    }

    /// Build a listing entry from a nearby-search result
    pub fn summary_from_place(place: &GooglePlace) -> Result<RestaurantSummary, RestaurantsError> {
        let (lat, lng) = Self::require_location(place, place.place_id.as_deref())?;

        let place_id = place
            .place_id
            .clone()
            .ok_or_else(|| RestaurantsError::MalformedPlace("missing place_id".to_string()))?;
        let name = Self::require_name(place, &place_id)?;

        // Only the first photo is considered
        let photos = place
            .photos
            .as_ref()
            .and_then(|photos| photos.first())
            .and_then(|photo| photo.photo_reference.clone())
            .filter(|r| !r.is_empty())
            .map(|r| vec![r]);

        Ok(RestaurantSummary {
            place_id,
            name,
            address: non_empty(&place.vicinity).or_else(|| non_empty(&place.formatted_address)),
            lat,
            lng,
            rating: place.rating,
            price_level: place.price_level,
            types: place.types.clone(),
            user_ratings_total: place.user_ratings_total,
            photos,
        })
    }

    /// Build a detail record from a Place Details result
    pub fn detail_from_place(
        place_id: &str,
        place: &GooglePlace,
    ) -> Result<RestaurantDetail, RestaurantsError> {
        let (lat, lng) = Self::require_location(place, Some(place_id))?;
        let name = Self::require_name(place, place_id)?;

        let photos: Vec<String> = place
            .photos
            .iter()
            .flatten()
            .take(MAX_DETAIL_PHOTOS)
            .filter_map(|photo| photo.photo_reference.clone())
            .filter(|r| !r.is_empty())
            .collect();

        Ok(RestaurantDetail {
            summary: RestaurantSummary {
                place_id: place_id.to_string(),
                name,
                address: place.formatted_address.clone(),
                lat,
                lng,
                rating: place.rating,
                price_level: place.price_level,
                types: place.types.clone(),
                user_ratings_total: place.user_ratings_total,
                photos: if photos.is_empty() { None } else { Some(photos) },
            },
            phone_number: place.formatted_phone_number.clone(),
            website: place.website.clone(),
            opening_hours: place.opening_hours.clone(),
            menu_url: place.website.clone(),
        })
    }

    fn require_location(
        place: &GooglePlace,
        place_id: Option<&str>,
    ) -> Result<(f64, f64), RestaurantsError> {
        place.coordinates().ok_or_else(|| {
            RestaurantsError::MissingLocationData(place_id.unwrap_or("<unknown>").to_string())
        })
    }

    fn require_name(place: &GooglePlace, place_id: &str) -> Result<String, RestaurantsError> {
        place
            .name
            .clone()
            .ok_or_else(|| RestaurantsError::MalformedPlace(format!("missing name for {}", place_id)))
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}
