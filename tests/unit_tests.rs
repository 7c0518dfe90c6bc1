// Unit tests for the nearby places relay

use nearby_places_relay::{validate, Credentials, NearbyPlacesRequest, Platform, Rejection};

const ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

fn credentials() -> Credentials {
    Credentials::new("ios-key", "android-key", "web-key")
}

fn request(platform: &str) -> NearbyPlacesRequest {
    NearbyPlacesRequest {
        latitude: Some("37.4".to_string()),
        longitude: Some("-122.1".to_string()),
        radius: Some("500".to_string()),
        platform: Some(platform.to_string()),
        pagetoken: None,
    }
}

#[test]
fn test_web_scenario_url() {
    let validated = validate(&request("web"), &credentials()).unwrap();
    assert_eq!(validated.platform, Platform::Web);

    let url = validated.query.to_url(ENDPOINT);
    assert_eq!(
        url,
        format!(
            "{}?location=37.4,-122.1&radius=500&type=establishment&key=web-key",
            ENDPOINT
        )
    );
}

#[test]
fn test_page_token_in_url() {
    let mut req = request("ios");
    req.pagetoken = Some("next_page_token".to_string());

    let url = validate(&req, &credentials()).unwrap().query.to_url(ENDPOINT);
    assert!(url.contains("key=ios-key"));
    assert!(url.contains("pagetoken=next_page_token"));
}

#[test]
fn test_rejected_request_builds_nothing() {
    let result = validate(&request("symbian"), &credentials());
    assert!(matches!(result, Err(Rejection::InvalidPlatform)));
}

#[test]
fn test_query_debug_hides_key() {
    let validated = validate(&request("android"), &credentials()).unwrap();
    let rendered = format!("{:?}", validated);
    assert!(!rendered.contains("android-key"));
    assert!(rendered.contains("37.4"));
}
