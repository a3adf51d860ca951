use reqwest::Client;
use serde::Serialize;

use crate::api_interfaces::listing::RestaurantEntry;
use crate::constants::{DEFAULT_LISTING_SERVICE_URL, RESTAURANT_GRID_CARD_INDEX};
use crate::error::GetError;

pub use crate::api_interfaces::listing::ListingResponse;

/// A single restaurant's display data, projected out of the listing payload.
///
/// Recomputed from the raw payload on every extraction; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub avg_rating: f32,
    pub cuisines: Vec<String>,
    pub image_id: String,
    pub area_name: String,
}

impl Restaurant {
    /// Resolve the record's image by prefixing the CDN base URL.
    pub fn image_url(&self, base: &str) -> String {
        format!("{}{}", base, self.image_id)
    }
}

fn project(entry: &RestaurantEntry) -> Option<Restaurant> {
    let info = entry.info.as_ref()?;
    Some(Restaurant {
        id: info.id.clone().unwrap_or_default(),
        name: info.name.clone().unwrap_or_default(),
        avg_rating: info.avg_rating.unwrap_or(0.0),
        cuisines: info.cuisines.clone(),
        image_id: info.cloudinary_image_id.clone().unwrap_or_default(),
        area_name: info.area_name.clone().unwrap_or_default(),
    })
}

/// Extract the restaurant grid from a possibly-incomplete listing payload.
///
/// The grid lives at
/// `data.cards[RESTAURANT_GRID_CARD_INDEX].card.card.gridElements.infoWithStyle.restaurants`.
/// Any missing link in that chain yields an empty vec, and entries without an
/// `info` object are skipped. Output order follows upstream order; no
/// client-side sorting.
pub fn restaurants(response: &ListingResponse) -> Vec<Restaurant> {
    response
        .data
        .as_ref()
        .and_then(|data| data.cards.get(RESTAURANT_GRID_CARD_INDEX))
        .and_then(|wrapper| wrapper.card.as_ref())
        .and_then(|outer| outer.card.as_ref())
        .and_then(|inner| inner.grid_elements.as_ref())
        .and_then(|grid| grid.info_with_style.as_ref())
        .map(|grid| grid.restaurants.as_slice())
        .unwrap_or(&[])
        .iter()
        .filter_map(project)
        .collect()
}

/// Fetch the raw listing payload from the listing service.
///
/// Issues a single GET with no retry and no cancellation. `listing_url`
/// overrides the default endpoint; tests point it at a mock server.
pub async fn get(
    client: &Client,
    listing_url: Option<&str>,
) -> Result<ListingResponse, GetError> {
    let response = client
        .get(listing_url.unwrap_or(DEFAULT_LISTING_SERVICE_URL))
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(GetError::ResponseError(response.status()));
    }
    let body = response.text().await.map_err(GetError::ResponseBodyError)?;
    let parsed_body = serde_json::from_str::<ListingResponse>(&body)?;
    Ok(parsed_body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::{json, Value};

    /// Builds a payload with the grid card at the empirically-expected index.
    fn listing_payload(restaurants: Value) -> Value {
        json!({
            "data": {
                "cards": [
                    { "card": { "card": { "id": "topical_banner" } } },
                    { "card": { "card": { "id": "whats_on_your_mind" } } },
                    { "card": { "card": { "id": "top_brands" } } },
                    { "card": { "card": { "id": "popup" } } },
                    { "card": { "card": {
                        "gridElements": {
                            "infoWithStyle": { "restaurants": restaurants }
                        }
                    } } },
                ]
            }
        })
    }

    fn entry(id: &str, name: &str, rating: f32, image_id: &str) -> Value {
        json!({
            "info": {
                "id": id,
                "name": name,
                "avgRating": rating,
                "cuisines": ["South Indian", "Chinese"],
                "cloudinaryImageId": image_id,
                "areaName": "Koramangala"
            }
        })
    }

    fn parse(payload: Value) -> ListingResponse {
        serde_json::from_value(payload).unwrap()
    }

    #[tokio::test]
    async fn get_success() {
        // Arrange
        let server = MockServer::start_async().await;
        let payload = listing_payload(json!([entry("1001", "A", 4.2, "x")]));
        let listing_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).json_body(payload);
            })
            .await;
        let url = server.url("/");
        let client = reqwest::Client::new();

        // Act
        let response = get(&client, Some(url.as_str())).await;

        // Assert
        assert!(
            response.is_ok(),
            "Failed to get listing: {:?}",
            response.unwrap_err()
        );
        let records = restaurants(&response.unwrap());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "A");
        listing_mock.assert();
    }

    #[tokio::test]
    async fn get_invalid_url() {
        // Arrange
        let client = reqwest::Client::new();

        // Act
        let response = get(&client, Some("http://test.invalid")).await;

        // Assert
        assert!(response.is_err());
        assert!(matches!(response.unwrap_err(), GetError::RequestError(_)));
    }

    #[tokio::test]
    async fn get_bad_status() {
        // Arrange
        let server = MockServer::start_async().await;
        let listing_mock = server
            .mock_async(|when, then| {
                when.path("/");
                then.status(503);
            })
            .await;
        let url = server.url("/");
        let client = reqwest::Client::new();

        // Act
        let response = get(&client, Some(url.as_str())).await;

        // Assert
        assert!(response.is_err());
        assert!(matches!(response.unwrap_err(), GetError::ResponseError(_)));
        listing_mock.assert();
    }

    #[tokio::test]
    async fn get_bad_json() {
        // Arrange
        let server = MockServer::start_async().await;
        let listing_mock = server
            .mock_async(|when, then| {
                when.path("/");
                then.status(200)
                    .header("Content-Type", "text/html")
                    .body("<html>access denied</html>");
            })
            .await;
        let url = server.url("/");
        let client = reqwest::Client::new();

        // Act
        let response = get(&client, Some(url.as_str())).await;

        // Assert
        assert!(response.is_err());
        assert!(matches!(response.unwrap_err(), GetError::ParseError(_)));
        listing_mock.assert();
    }

    #[test]
    fn restaurants_missing_path_yields_empty() {
        let payloads = [
            json!({}),
            json!({ "data": {} }),
            json!({ "data": { "cards": [] } }),
            // Grid card index out of range.
            json!({ "data": { "cards": [{ "card": { "card": {} } }] } }),
            // Card at the grid index has no gridElements.
            json!({ "data": { "cards": [
                {}, {}, {}, {},
                { "card": { "card": {} } },
            ] } }),
            // gridElements present but infoWithStyle absent.
            json!({ "data": { "cards": [
                {}, {}, {}, {},
                { "card": { "card": { "gridElements": {} } } },
            ] } }),
        ];
        for payload in payloads {
            let records = restaurants(&parse(payload));
            assert!(records.is_empty());
        }
    }

    #[test]
    fn restaurants_preserves_upstream_order() {
        let payload = listing_payload(json!([
            entry("1", "A", 4.2, "x"),
            entry("2", "B", 3.9, "y"),
            entry("3", "C", 4.6, "z"),
        ]));
        let records = restaurants(&parse(payload));
        assert_eq!(records.len(), 3);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn restaurants_skips_entries_without_info() {
        let payload = listing_payload(json!([
            entry("1", "A", 4.2, "x"),
            json!({}),
            entry("3", "C", 4.6, "z"),
        ]));
        let records = restaurants(&parse(payload));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[1].name, "C");
    }

    #[test]
    fn restaurants_is_idempotent() {
        let response = parse(listing_payload(json!([
            entry("1", "A", 4.2, "x"),
            entry("2", "B", 3.9, "y"),
        ])));
        assert_eq!(restaurants(&response), restaurants(&response));
    }

    #[test]
    fn restaurants_defaults_missing_info_fields() {
        let payload = listing_payload(json!([{ "info": { "name": "A" } }]));
        let records = restaurants(&parse(payload));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[0].avg_rating, 0.0);
        assert!(records[0].cuisines.is_empty());
        assert!(records[0].image_id.is_empty());
    }

    #[test]
    fn image_url_prefixes_base() {
        let record = Restaurant {
            id: "1".to_string(),
            name: "A".to_string(),
            avg_rating: 4.2,
            cuisines: vec![],
            image_id: "x".to_string(),
            area_name: "".to_string(),
        };
        assert_eq!(record.image_url("https://cdn.test/"), "https://cdn.test/x");
    }
}
