// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

#[cfg(test)]
pub mod fake_places;
pub mod google_places_client;
pub mod restaurant_service;

pub use google_places_client::*;
pub use restaurant_service::*;
