// src/services/fake_places.rs
// DOCUMENTATION: In-memory PlacesGateway for tests
// PURPOSE: Serve canned provider payloads and record what was requested

use crate::errors::RestaurantsError;
use crate::services::google_places_client::{
    NearbySearchRequest, NearbySearchResponse, PlaceDetailsResponse, PlacesGateway,
};
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct FakePlacesGateway {
    nearby: NearbySearchResponse,
    detail: PlaceDetailsResponse,
    failure: Option<String>,
    last_nearby: Mutex<Option<NearbySearchRequest>>,
    last_detail: Mutex<Option<(String, Vec<String>)>>,
}

impl FakePlacesGateway {
    pub fn with_nearby(nearby: NearbySearchResponse) -> Self {
        Self {
            nearby,
            ..Self::default()
        }
    }

    pub fn with_detail(detail: PlaceDetailsResponse) -> Self {
        Self {
            detail,
            ..Self::default()
        }
    }

    /// Every call fails as a transport error would
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub async fn last_nearby_request(&self) -> Option<NearbySearchRequest> {
        self.last_nearby.lock().await.clone()
    }

    pub async fn last_detail_request(&self) -> Option<(String, Vec<String>)> {
        self.last_detail.lock().await.clone()
    }
}

#[async_trait]
impl PlacesGateway for FakePlacesGateway {
    async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<NearbySearchResponse, RestaurantsError> {
        *self.last_nearby.lock().await = Some(request.clone());

        if let Some(message) = &self.failure {
            return Err(RestaurantsError::Provider(message.clone()));
        }

        let mut response = self.nearby.clone();
        // Rough stand-in for provider keyword matching: name or type substring
        if let Some(keyword) = &request.keyword {
            let keyword = keyword.to_lowercase();
            response.results.retain(|place| {
                place
                    .name
                    .as_deref()
                    .map(|n| n.to_lowercase().contains(&keyword))
                    .unwrap_or(false)
                    || place.types.iter().any(|t| t.to_lowercase().contains(&keyword))
            });
        }
        Ok(response)
    }

    async fn place_detail(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<PlaceDetailsResponse, RestaurantsError> {
        *self.last_detail.lock().await = Some((
            place_id.to_string(),
            fields.iter().map(|f| f.to_string()).collect(),
        ));

        if let Some(message) = &self.failure {
            return Err(RestaurantsError::Provider(message.clone()));
        }

        Ok(self.detail.clone())
    }
}
