// Route exports
pub mod nearby;

use actix_web::web;

pub use nearby::{AppState, RelayError};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(nearby::configure);
}
