use std::fmt;

/// Place category sent with every nearby search
pub const ESTABLISHMENT_TYPE: &str = "establishment";

/// Client platform declared by the caller
///
/// Only the exact lowercase literals are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::Web];

    /// Parse a platform literal, `None` for anything unrecognized
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ios" => Some(Platform::Ios),
            "android" => Some(Platform::Android),
            "web" => Some(Platform::Web),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One Places API key per platform
///
/// Built once at startup and shared read-only by every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    ios: String,
    android: String,
    web: String,
}

impl Credentials {
    pub fn new(ios: impl Into<String>, android: impl Into<String>, web: impl Into<String>) -> Self {
        Self {
            ios: ios.into(),
            android: android.into(),
            web: web.into(),
        }
    }

    /// API key for the given platform
    pub fn key_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
            Platform::Web => &self.web,
        }
    }
}

// Keys must never reach the logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("ios", &"<redacted>")
            .field("android", &"<redacted>")
            .field("web", &"<redacted>")
            .finish()
    }
}

/// Outbound nearby search query
///
/// Built from a validated request and discarded once the call completes.
#[derive(Clone, PartialEq, Eq)]
pub struct NearbySearchQuery {
    pub latitude: String,
    pub longitude: String,
    pub radius: String,
    pub key: String,
    pub page_token: Option<String>,
}

impl NearbySearchQuery {
    /// Render the full upstream URL for `endpoint`
    ///
    /// Each value is percent-encoded on its own; the comma between latitude
    /// and longitude stays literal.
    pub fn to_url(&self, endpoint: &str) -> String {
        let mut url = format!(
            "{}?location={},{}&radius={}&type={}&key={}",
            endpoint,
            urlencoding::encode(&self.latitude),
            urlencoding::encode(&self.longitude),
            urlencoding::encode(&self.radius),
            ESTABLISHMENT_TYPE,
            urlencoding::encode(&self.key),
        );

        if let Some(token) = &self.page_token {
            url.push_str("&pagetoken=");
            url.push_str(&urlencoding::encode(token));
        }

        url
    }
}

impl fmt::Debug for NearbySearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NearbySearchQuery")
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("radius", &self.radius)
            .field("key", &"<redacted>")
            .field("page_token", &self.page_token)
            .finish()
    }
}
