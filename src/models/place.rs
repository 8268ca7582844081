use serde::{Deserialize, Serialize};

pub const NO_REVIEW_AVAILABLE: &str = "no review available";
pub const UNKNOWN_DATE: &str = "unknown date";
pub const UNKNOWN_ADDRESS: &str = "unknown address";

/// One normalized search result. Built once at decode time, never mutated.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaceRecord {
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub price_level: Option<u8>,
    pub latest_review: String,
    pub review_rating: Option<f64>,
    pub review_date: String,
    pub photo_reference: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GeoBias {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewSummary {
    pub text: String,
    pub rating: Option<f64>,
    pub date: String,
}
