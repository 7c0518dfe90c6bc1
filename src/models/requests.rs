/// Query parameters of `GET /nearbyPlaces`
///
/// Everything is optional at this layer; the relay decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NearbyPlacesRequest {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub radius: Option<String>,
    pub platform: Option<String>,
    pub pagetoken: Option<String>,
}

impl NearbyPlacesRequest {
    /// Build a request from decoded query pairs
    ///
    /// Repeated fields keep their first value, except `platform`: a repeated
    /// platform is joined with commas so it never matches a known platform.
    /// Unknown fields are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut request = Self::default();

        for (name, value) in pairs {
            let slot = match name.as_str() {
                "latitude" => &mut request.latitude,
                "longitude" => &mut request.longitude,
                "radius" => &mut request.radius,
                "pagetoken" => &mut request.pagetoken,
                "platform" => {
                    if let Some(existing) = request.platform.as_mut() {
                        existing.push(',');
                        existing.push_str(&value);
                    } else {
                        request.platform = Some(value);
                    }
                    continue;
                }
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value);
            }
        }

        request
    }
}
