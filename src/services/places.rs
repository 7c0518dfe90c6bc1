use crate::config::PlacesSettings;
use crate::models::NearbySearchQuery;
use actix_web::web::Bytes;
use reqwest::Client;
use serde::de::IgnoredAny;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the Places API
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("{}", error_chain(.0))]
    RequestError(reqwest::Error),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

// The request URL carries the API key, so it is stripped before the error
// can be displayed anywhere.
impl From<reqwest::Error> for PlacesError {
    fn from(err: reqwest::Error) -> Self {
        PlacesError::RequestError(err.without_url())
    }
}

impl PlacesError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, PlacesError::RequestError(e) if e.is_timeout())
    }
}

/// Render an error followed by each of its sources
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Places nearby search client
///
/// Holds a pooled HTTP client shared by all requests. No retries are made;
/// every call maps to exactly one upstream GET.
pub struct PlacesClient {
    endpoint: String,
    client: Client,
}

impl PlacesClient {
    /// Create a new Places client
    pub fn new(
        endpoint: String,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self { endpoint, client })
    }

    pub fn from_settings(settings: &PlacesSettings) -> Result<Self, PlacesError> {
        Self::new(
            settings.endpoint.clone(),
            Duration::from_secs(settings.timeout_secs),
            Duration::from_secs(settings.connect_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run a nearby search and return the raw JSON body
    ///
    /// The body is checked to be JSON but otherwise returned byte for byte.
    pub async fn nearby_search(&self, query: &NearbySearchQuery) -> Result<Bytes, PlacesError> {
        let url = query.to_url(&self.endpoint);

        tracing::debug!(
            "Nearby search: location={},{} radius={} paged={}",
            query.latitude,
            query.longitude,
            query.radius,
            query.page_token.is_some()
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;

        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(|e| PlacesError::InvalidResponse(e.to_string()))?;

        Ok(body)
    }
}
