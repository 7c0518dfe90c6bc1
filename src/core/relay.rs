use crate::models::{Credentials, NearbyPlacesRequest, NearbySearchQuery, Platform};
use thiserror::Error;

/// Reasons a request is turned away before any upstream call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Invalid or missing platform parameter")]
    InvalidPlatform,
}

/// A request that passed validation, ready to dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub platform: Platform,
    pub query: NearbySearchQuery,
}

/// Validate the inbound parameters and select the platform credential
///
/// Only the platform is checked. Missing coordinates or radius are forwarded
/// as empty values and left for the upstream to judge. An empty page token is
/// treated the same as an absent one.
pub fn validate(
    request: &NearbyPlacesRequest,
    credentials: &Credentials,
) -> Result<ValidatedRequest, Rejection> {
    let platform = request
        .platform
        .as_deref()
        .and_then(Platform::parse)
        .ok_or(Rejection::InvalidPlatform)?;

    let query = NearbySearchQuery {
        latitude: request.latitude.clone().unwrap_or_default(),
        longitude: request.longitude.clone().unwrap_or_default(),
        radius: request.radius.clone().unwrap_or_default(),
        key: credentials.key_for(platform).to_string(),
        page_token: request.pagetoken.clone().filter(|token| !token.is_empty()),
    };

    Ok(ValidatedRequest { platform, query })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("ios-key", "android-key", "web-key")
    }

    fn request(platform: Option<&str>, pagetoken: Option<&str>) -> NearbyPlacesRequest {
        NearbyPlacesRequest {
            latitude: Some("37.4".to_string()),
            longitude: Some("-122.1".to_string()),
            radius: Some("500".to_string()),
            platform: platform.map(str::to_string),
            pagetoken: pagetoken.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_platform_rejected() {
        let result = validate(&request(None, None), &credentials());
        assert_eq!(result, Err(Rejection::InvalidPlatform));
    }

    #[test]
    fn test_unknown_platform_rejected() {
        for platform in ["", "windows", "iOS", "WEB"] {
            let result = validate(&request(Some(platform), None), &credentials());
            assert_eq!(result, Err(Rejection::InvalidPlatform), "accepted {:?}", platform);
        }
    }

    #[test]
    fn test_rejection_message() {
        assert_eq!(
            Rejection::InvalidPlatform.to_string(),
            "Invalid or missing platform parameter"
        );
    }

    #[test]
    fn test_selects_key_per_platform() {
        let creds = credentials();
        for (platform, key) in [("ios", "ios-key"), ("android", "android-key"), ("web", "web-key")] {
            let validated = validate(&request(Some(platform), None), &creds).unwrap();
            assert_eq!(validated.platform.as_str(), platform);
            assert_eq!(validated.query.key, key);
        }
    }

    #[test]
    fn test_page_token_forwarded_when_present() {
        let validated = validate(&request(Some("web"), Some("next-page")), &credentials()).unwrap();
        assert_eq!(validated.query.page_token.as_deref(), Some("next-page"));
    }

    #[test]
    fn test_empty_page_token_dropped() {
        let validated = validate(&request(Some("web"), Some("")), &credentials()).unwrap();
        assert_eq!(validated.query.page_token, None);
    }

    #[test]
    fn test_missing_coordinates_forwarded_empty() {
        let req = NearbyPlacesRequest {
            platform: Some("android".to_string()),
            ..Default::default()
        };
        let validated = validate(&req, &credentials()).unwrap();
        assert_eq!(validated.query.latitude, "");
        assert_eq!(validated.query.longitude, "");
        assert_eq!(validated.query.radius, "");
    }
}
