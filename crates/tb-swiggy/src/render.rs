use crate::client::Client;
use crate::constants::PLACEHOLDER_CARD_COUNT;
use crate::error::GetError;
use crate::listing::{self, ListingResponse, Restaurant};

/// Lifecycle of the listing data behind the body view.
///
/// Starts as `NotLoaded` and transitions to `Loaded` at most once per
/// component instance.
#[derive(Debug)]
pub enum LoadState {
    NotLoaded,
    Loaded(ListingResponse),
}

/// Top bar: title, nav items, and a search box.
///
/// The search box is drawn but wired to nothing; no filtering happens
/// anywhere downstream.
#[derive(Debug)]
pub struct Header {
    title: String,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn render(&self) -> String {
        let nav = ["Home", "Offers", "Help", "Sign In", "Cart"].join("  ");
        format!(
            "== {} ==\n{}\n[ Search restaurants...                ]\n",
            self.title, nav
        )
    }
}

/// The restaurant grid view.
///
/// Renders a fixed-count shimmer grid until `load` resolves; afterwards every
/// render re-derives the card list from the stored payload.
#[derive(Debug)]
pub struct Body {
    state: LoadState,
    image_base: String,
}

impl Body {
    pub fn new(image_base: impl Into<String>) -> Self {
        Self {
            state: LoadState::NotLoaded,
            image_base: image_base.into(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded(_))
    }

    /// Fetch the listing and transition to `Loaded`.
    ///
    /// Performs at most one request per instance: once loaded, further calls
    /// return without touching the network. On error the state stays
    /// `NotLoaded` and the error propagates to the caller.
    pub async fn load(&mut self, client: &Client) -> Result<(), GetError> {
        if self.is_loaded() {
            return Ok(());
        }
        let response = client.get_listing().await?;
        self.state = LoadState::Loaded(response);
        Ok(())
    }

    pub fn render(&self) -> String {
        match &self.state {
            LoadState::NotLoaded => render_placeholder_grid(),
            LoadState::Loaded(response) => {
                let records = listing::restaurants(response);
                if records.is_empty() {
                    return "No restaurants found.\n".to_string();
                }
                records
                    .iter()
                    .map(|record| render_card(record, &self.image_base))
                    .collect()
            }
        }
    }
}

fn render_card(record: &Restaurant, image_base: &str) -> String {
    format!(
        "* {}\n  {:.1} | {}\n  {}\n  {}\n\n",
        record.name,
        record.avg_rating,
        record.cuisines.join(", "),
        record.area_name,
        record.image_url(image_base),
    )
}

fn render_placeholder_grid() -> String {
    let card = "\u{2591}".repeat(16);
    format!("{card}\n{card}\n{card}\n\n").repeat(PLACEHOLDER_CARD_COUNT)
}
