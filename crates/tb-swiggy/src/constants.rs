/// The default URL for the Swiggy restaurant listing service.
///
/// Latitude, longitude, and page type are baked into the query string the
/// same way the desktop listing page sends them.
pub const DEFAULT_LISTING_SERVICE_URL: &str = "https://www.swiggy.com/dapi/restaurants/list/v5?lat=12.9804517&lng=77.746281&is-seo-homepage-enabled=true&page_type=DESKTOP_WEB_LISTING";

/// The base URL prefix used to resolve a record's cloudinary image id.
pub const DEFAULT_IMAGE_CDN_BASE_URL: &str =
    "https://media-assets.swiggy.com/swiggy/image/upload/fl_lossy,f_auto,q_auto,w_264,h_288,c_fill/";

/// Index of the restaurant grid card in the top-level `cards` sequence.
///
/// Empirically chosen against the current listing payload. Breaks whenever
/// the upstream reorders its homepage cards.
pub const RESTAURANT_GRID_CARD_INDEX: usize = 4;

/// Number of shimmer cards rendered while the listing is pending.
pub const PLACEHOLDER_CARD_COUNT: usize = 12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_image_cdn_base_url_has_trailing_slash() {
        assert!(DEFAULT_IMAGE_CDN_BASE_URL.ends_with('/'));
    }

    #[test]
    fn default_listing_service_url_pins_coordinates() {
        assert!(DEFAULT_LISTING_SERVICE_URL.contains("lat="));
        assert!(DEFAULT_LISTING_SERVICE_URL.contains("lng="));
    }
}
