// src/handlers/restaurants.rs
// DOCUMENTATION: HTTP handlers for restaurant operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::RestaurantsError;
use crate::models::SearchQuery;
use crate::services::{PlacesGateway, RestaurantService};
use actix_web::{error::QueryPayloadError, web, HttpRequest, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// GET /restaurants
/// Search restaurants around lat/lng with optional price and cuisine filters
pub async fn search_restaurants(
    gateway: web::Data<Arc<dyn PlacesGateway>>,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, RestaurantsError> {
    let query = query.into_inner();
    if let Err(e) = query.validate() {
        return Err(RestaurantsError::Validation(e.to_string()));
    }

    let result = RestaurantService::search_restaurants(gateway.get_ref().as_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /restaurants/{place_id}
/// Retrieve details for one restaurant
pub async fn get_restaurant(
    gateway: web::Data<Arc<dyn PlacesGateway>>,
    path: web::Path<String>,
) -> Result<impl Responder, RestaurantsError> {
    let place_id = path.into_inner();
    let detail = RestaurantService::get_restaurant(gateway.get_ref().as_ref(), &place_id).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Missing or mistyped query parameters are reported as 422
fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RestaurantsError::Validation(err.to_string()).into()
}

/// Configuration for restaurant routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/restaurants")
                .route("", web::get().to(search_restaurants))
                .route("/{place_id}", web::get().to(get_restaurant)),
        );
}
