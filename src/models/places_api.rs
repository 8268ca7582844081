use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TextSearchRequest {
    pub text_query: String,
    pub max_result_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_bias: Option<LocationBias>,
}

#[derive(Clone, Serialize, Debug)]
pub struct LocationBias {
    pub circle: Circle,
}

#[derive(Clone, Serialize, Debug)]
pub struct Circle {
    pub center: LatLng,
    pub radius: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

// Each entry in `places` stays a raw value so one malformed object can be
// skipped without failing the whole batch.
#[derive(Clone, Deserialize, Debug)]
pub struct PlacesSearchResponse {
    #[serde(default)]
    pub places: Vec<Value>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    pub display_name: Option<LocalizedText>,
    pub formatted_address: Option<String>,
    pub location: Option<LatLng>,
    pub rating: Option<Value>,
    pub price_level: Option<u8>,
    #[serde(default)]
    pub photos: Vec<RawPhoto>,
    #[serde(default)]
    pub reviews: Vec<RawReview>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct LocalizedText {
    pub text: Option<String>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawPhoto {
    pub name: Option<String>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawReview {
    pub text: Option<String>,
    pub rating: Option<f64>,
    pub publish_time: Option<String>,
}
