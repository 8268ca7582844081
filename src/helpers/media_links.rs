pub const PHOTO_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/400x300?text=No+image+available";

pub fn photo_url(photo_reference: Option<&str>, api_key: &str) -> String {
    match photo_reference {
        Some(reference) => format!(
            "https://maps.googleapis.com/maps/api/place/photo?maxwidth=400&photo_reference={}&key={}",
            reference, api_key
        ),
        None => PHOTO_PLACEHOLDER_URL.to_string(),
    }
}

pub fn maps_search_link(latitude: f64, longitude: f64) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        latitude, longitude
    )
}
