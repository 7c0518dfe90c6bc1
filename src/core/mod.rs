// Core relay exports
pub mod relay;

pub use relay::{validate, Rejection, ValidatedRequest};
