//! Nearby Places Relay - platform-keyed proxy for the Places nearby search API
//!
//! Each request picks the API key for the caller's platform, forwards the
//! search to the Places API and hands the upstream JSON back untouched.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::core::{validate, Rejection, ValidatedRequest};
pub use crate::models::{Credentials, NearbyPlacesRequest, NearbySearchQuery, Platform};
pub use crate::routes::{AppState, RelayError};
pub use crate::services::{PlacesClient, PlacesError};
