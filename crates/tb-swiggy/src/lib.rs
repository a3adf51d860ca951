mod api_interfaces;
pub mod client;
pub mod constants;
pub mod error;
pub mod listing;
pub mod render;
mod util;

pub use client::Client;
pub use listing::Restaurant;
pub use render::{Body, Header, LoadState};
pub use util::default_http_client;
