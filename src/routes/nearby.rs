use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, Responder, ResponseError};
use crate::core::{validate, Rejection};
use crate::models::{Credentials, ErrorResponse, HealthResponse, NearbyPlacesRequest};
use crate::services::{PlacesClient, PlacesError};
use std::sync::Arc;
use thiserror::Error;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub places: Arc<PlacesClient>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(places: PlacesClient, credentials: Credentials) -> Self {
        Self {
            places: Arc::new(places),
            credentials: Arc::new(credentials),
        }
    }
}

/// Failures surfaced to the caller of the relay
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Upstream(#[from] PlacesError),
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Rejected(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// Configure the relay routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/nearbyPlaces", web::get().to(nearby_places));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Nearby places relay
///
/// GET /nearbyPlaces?latitude=..&longitude=..&radius=..&platform=ios|android|web[&pagetoken=..]
///
/// Responds with the upstream JSON body unchanged, 400 for a missing or
/// unknown platform, or 500 when the upstream call fails.
async fn nearby_places(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, RelayError> {
    // An unreadable query string leaves every field absent, which the
    // platform check then rejects.
    let pairs = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();
    let query = NearbyPlacesRequest::from_pairs(pairs);

    let validated = validate(&query, &state.credentials).map_err(|e| {
        tracing::info!("Rejected nearby search: platform={:?}: {}", query.platform, e);
        e
    })?;

    tracing::info!(
        "Relaying nearby search for platform {} (paged: {})",
        validated.platform,
        validated.query.page_token.is_some()
    );

    let body = state.places.nearby_search(&validated.query).await.map_err(|e| {
        if e.is_timeout() {
            tracing::error!("Places API timed out for platform {}: {}", validated.platform, e);
        } else {
            tracing::error!("Places API call failed for platform {}: {}", validated.platform, e);
        }
        e
    })?;

    tracing::debug!("Relayed {} bytes for platform {}", body.len(), validated.platform);

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}
