use anyhow::{anyhow, Context};
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::info;
use crate::helpers::media_links;
use crate::models::place::{
    GeoBias, PlaceRecord, ReviewSummary, NO_REVIEW_AVAILABLE, UNKNOWN_ADDRESS, UNKNOWN_DATE,
};
use crate::models::places_api::{
    Circle, LatLng, LocationBias, PlacesSearchResponse, RawPlace, RawReview, TextSearchRequest,
};

pub const MAX_RESULT_COUNT: u32 = 20;
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

const FIELD_MASK: &str = "places.displayName,places.formattedAddress,places.location,\
places.rating,places.photos,places.priceLevel,places.reviews";

pub struct PlacesApiRepo {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PlacesApiRepo {
    pub fn new(
        api_key: String,
        base_url: String,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build the places API HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    pub async fn search_places(
        &self,
        query: &str,
        bias: Option<GeoBias>,
        max_price: u8,
        min_rating: f64,
    ) -> anyhow::Result<Vec<PlaceRecord>> {
        let request = TextSearchRequest {
            text_query: query.to_string(),
            max_result_count: MAX_RESULT_COUNT,
            location_bias: bias.map(|bias| LocationBias {
                circle: Circle {
                    center: LatLng {
                        latitude: bias.latitude,
                        longitude: bias.longitude,
                    },
                    radius: bias.radius_m,
                },
            }),
        };

        info!("Searching for places matching query: {}", query);
        let response = self.client
            .post(format!("{}:searchText", self.base_url))
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&request)
            .send()
            .await
            .context("Failed to reach the places search API")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Places search API responded with status: {}", status));
        }

        let search_response = response
            .json::<PlacesSearchResponse>()
            .await
            .context("Failed to decode the places search API response")?;

        Ok(parse_places_response(search_response, max_price, min_rating))
    }

    pub fn photo_url(&self, photo_reference: Option<&str>) -> String {
        media_links::photo_url(photo_reference, &self.api_key)
    }
}

fn parse_places_response(
    response: PlacesSearchResponse,
    max_price: u8,
    min_rating: f64,
) -> Vec<PlaceRecord> {
    response
        .places
        .into_iter()
        .filter_map(parse_place_into_record)
        .filter(|record| passes_filters(record, max_price, min_rating))
        .collect()
}

fn parse_place_into_record(
    raw_place: Value,
) -> Option<PlaceRecord> {
    let place = serde_json::from_value::<RawPlace>(raw_place).ok()?;

    let name = place.display_name?.text?;
    let location = place.location?;
    let rating = place.rating.as_ref().and_then(Value::as_f64).unwrap_or(0.0);
    let photo_reference = place
        .photos
        .first()
        .and_then(|photo| photo.name.as_deref())
        .and_then(|resource_name| resource_name.rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string);
    let review = select_representative_review(&place.reviews);

    Some(PlaceRecord {
        name,
        address: place
            .formatted_address
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
        rating,
        latitude: location.latitude,
        longitude: location.longitude,
        price_level: place.price_level,
        latest_review: review.text,
        review_rating: review.rating,
        review_date: review.date,
        photo_reference,
    })
}

// The review list arrives in provider relevance order, so the first entry is
// the representative one.
fn select_representative_review(
    reviews: &[RawReview],
) -> ReviewSummary {
    let first_review = match reviews.first() {
        Some(review) => review,
        None => {
            return ReviewSummary {
                text: NO_REVIEW_AVAILABLE.to_string(),
                rating: None,
                date: UNKNOWN_DATE.to_string(),
            }
        }
    };

    let date = first_review
        .publish_time
        .as_deref()
        .and_then(format_publish_time)
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    ReviewSummary {
        text: first_review
            .text
            .clone()
            .unwrap_or_else(|| NO_REVIEW_AVAILABLE.to_string()),
        rating: first_review.rating,
        date,
    }
}

fn format_publish_time(
    publish_time: &str,
) -> Option<String> {
    let output_format = format_description!("[day]/[month]/[year]");
    let fallback_format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

    let date = match OffsetDateTime::parse(publish_time, &Rfc3339) {
        Ok(parsed) => parsed.date(),
        Err(_) => PrimitiveDateTime::parse(publish_time.trim_end_matches('Z'), fallback_format)
            .ok()?
            .date(),
    };

    date.format(output_format).ok()
}

fn passes_filters(
    record: &PlaceRecord,
    max_price: u8,
    min_rating: f64,
) -> bool {
    if record
        .price_level
        .map_or(false, |price_level| price_level > max_price)
    {
        return false;
    }
    record.rating >= min_rating
}
