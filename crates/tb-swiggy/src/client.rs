use thiserror::Error;

use crate::constants::DEFAULT_IMAGE_CDN_BASE_URL;
use crate::error::GetError;
use crate::listing::{self, ListingResponse};

#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    endpoints: Option<EndpointConfig>,
}

/// Endpoint overrides, mainly so tests can point at a mock server.
#[derive(Clone, Debug, Default)]
pub struct EndpointConfig {
    pub listing: Option<String>,
    pub image_cdn_base: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum EndpointConfigError {
    #[error("empty url provided for endpoint {0}")]
    EmptyUrl(&'static str),
    #[error("image cdn base must end with a slash (url: {0})")]
    ImageBaseMissingSlash(String),
}

impl EndpointConfig {
    pub fn validate(&self) -> Result<(), EndpointConfigError> {
        if let Some(listing) = &self.listing {
            if listing.is_empty() {
                return Err(EndpointConfigError::EmptyUrl("listing"));
            }
        }
        if let Some(base) = &self.image_cdn_base {
            if base.is_empty() {
                return Err(EndpointConfigError::EmptyUrl("image_cdn_base"));
            }
            // Image URLs are resolved by plain concatenation with the id.
            if !base.ends_with('/') {
                return Err(EndpointConfigError::ImageBaseMissingSlash(base.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("invalid endpoint configuration: {0}")]
    InvalidEndpointConfig(#[from] EndpointConfigError),
}

impl Client {
    pub fn new(
        http_client: reqwest::Client,
        endpoints: Option<EndpointConfig>,
    ) -> Result<Self, ClientInitError> {
        if let Some(endpoints) = &endpoints {
            endpoints.validate()?
        }
        Ok(Self {
            http_client,
            endpoints,
        })
    }

    /// Base URL used to resolve per-record image ids.
    pub fn image_cdn_base(&self) -> &str {
        self.endpoints
            .as_ref()
            .and_then(|endpoints| endpoints.image_cdn_base.as_deref())
            .unwrap_or(DEFAULT_IMAGE_CDN_BASE_URL)
    }

    /// Fetch the raw listing payload from the configured listing endpoint.
    pub async fn get_listing(&self) -> Result<ListingResponse, GetError> {
        let url = self
            .endpoints
            .as_ref()
            .and_then(|endpoints| endpoints.listing.as_deref());
        listing::get(&self.http_client, url).await
    }
}
