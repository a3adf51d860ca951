use serde::Deserialize;

// Request structure is omitted since the listing endpoint takes no body.

/// Raw listing payload from the dapi endpoint.
///
/// Every level of nesting is optional: the upstream shape is unversioned and
/// shifts without notice, so absence anywhere must deserialize cleanly
/// instead of failing the whole payload.
#[derive(Debug, Default, Deserialize)]
pub struct ListingResponse {
    pub data: Option<ListingData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub cards: Vec<CardWrapper>,
}

/// One entry of the top-level card sequence.
#[derive(Debug, Default, Deserialize)]
pub struct CardWrapper {
    pub card: Option<CardOuter>,
}

// The payload really does nest `card.card`.
#[derive(Debug, Default, Deserialize)]
pub struct CardOuter {
    pub card: Option<CardInner>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInner {
    pub grid_elements: Option<GridElements>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridElements {
    pub info_with_style: Option<InfoWithStyle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoWithStyle {
    #[serde(default)]
    pub restaurants: Vec<RestaurantEntry>,
}

/// Raw restaurant entry from the grid.
#[derive(Debug, Default, Deserialize)]
pub struct RestaurantEntry {
    pub info: Option<RestaurantInfo>,
}

/// Raw restaurant display data from the grid entry.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub avg_rating: Option<f32>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    pub cloudinary_image_id: Option<String>,
    pub area_name: Option<String>,
}
