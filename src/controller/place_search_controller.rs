use std::sync::Arc;
use axum::{Extension, Router};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::helpers::media_links;
use crate::models::place::{GeoBias, PlaceRecord};
use crate::repositories::places_api_repo::PlacesApiRepo;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/search", get(search_places))
        .route_layer(Extension(app_state.places_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchPlacesParam {
    pub query: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default = "default_radius_m")]
    pub radius_m: f64,
    #[serde(default = "default_max_price")]
    pub max_price: u8,
    #[serde(default)]
    pub min_rating: f64,
}

fn default_radius_m() -> f64 {
    5000.0
}

fn default_max_price() -> u8 {
    4
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceResponse {
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub price_level: Option<u8>,
    pub latest_review: String,
    pub review_rating: Option<f64>,
    pub review_date: String,
    pub photo_url: String,
    pub maps_link: String,
}

pub async fn search_places(
    Extension(places_repo): Extension<Arc<PlacesApiRepo>>,
    Query(query): Query<SearchPlacesParam>,
) -> impl IntoResponse {
    if let Err(message) = validate_search_params(&query) {
        return (StatusCode::BAD_REQUEST, message).into_response();
    }

    let bias = match (query.lat, query.lon) {
        (Some(latitude), Some(longitude)) => Some(GeoBias {
            latitude,
            longitude,
            radius_m: query.radius_m,
        }),
        _ => None,
    };

    let search_res = places_repo
        .search_places(
            &query.query,
            bias,
            query.max_price,
            query.min_rating,
        ).await;

    return match search_res {
        Ok(places) => {
            let results: Vec<PlaceResponse> = places
                .iter()
                .map(|place| build_place_response(place, &places_repo))
                .collect();
            (
                StatusCode::OK,
                json!(&results).to_string()
            ).into_response()
        }
        Err(e) => {
            warn!("Something went wrong searching for places due to: {}", e);
            (
                StatusCode::BAD_REQUEST,
                "Failed to search for places, please try again!"
            ).into_response()
        }
    };
}

fn validate_search_params(params: &SearchPlacesParam) -> Result<(), &'static str> {
    if params.query.trim().is_empty() {
        return Err("Search query must not be blank");
    }
    if params.max_price > 4 {
        return Err("max_price must be between 0 and 4");
    }
    if !(0.0..=5.0).contains(&params.min_rating) {
        return Err("min_rating must be between 0.0 and 5.0");
    }
    if params.lat.is_some() != params.lon.is_some() {
        return Err("Both lat and lon are required to bias the search");
    }
    if params.lat.is_some() && params.radius_m <= 0.0 {
        return Err("radius_m must be greater than zero");
    }
    Ok(())
}

fn build_place_response(
    record: &PlaceRecord,
    places_repo: &PlacesApiRepo,
) -> PlaceResponse {
    PlaceResponse {
        name: record.name.clone(),
        address: record.address.clone(),
        rating: record.rating,
        latitude: record.latitude,
        longitude: record.longitude,
        price_level: record.price_level,
        latest_review: record.latest_review.clone(),
        review_rating: record.review_rating,
        review_date: record.review_date.clone(),
        photo_url: places_repo.photo_url(record.photo_reference.as_deref()),
        maps_link: media_links::maps_search_link(record.latitude, record.longitude),
    }
}
