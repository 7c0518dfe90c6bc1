// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Credentials, NearbySearchQuery, Platform, ESTABLISHMENT_TYPE};
pub use requests::NearbyPlacesRequest;
pub use responses::{ErrorResponse, HealthResponse};
