// Service exports
pub mod places;

pub use places::{PlacesClient, PlacesError};
