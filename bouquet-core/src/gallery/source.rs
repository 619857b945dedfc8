//! Transports the gallery fetches listings through.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use super::GalleryError;
use super::state::PageQuery;
use crate::config::ClientConfig;
use crate::library::{AlbumListing, PageResult};

/// Source of listing pages for the gallery.
///
/// Implementations perform one request per call and never retry.
#[async_trait]
pub trait ListingSource: Send + Sync + std::fmt::Debug {
    /// Fetches the first page of every category in one request.
    ///
    /// # Errors
    /// - `GalleryError::Http` - Request could not be sent or read
    /// - `GalleryError::Status` - Server answered with a failure status
    /// - `GalleryError::Decode` - Response body was not a listing
    async fn fetch_album(&self) -> Result<AlbumListing, GalleryError>;

    /// Fetches one page of a single category.
    ///
    /// # Errors
    /// - `GalleryError::Http` - Request could not be sent or read
    /// - `GalleryError::Status` - Server answered with a failure status
    /// - `GalleryError::Decode` - Response body was not a page
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResult, GalleryError>;
}

/// Failure payload returned by the listing endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Listing source backed by the HTTP `GET /images` endpoint.
#[derive(Debug, Clone)]
pub struct HttpListingSource {
    client: reqwest::Client,
    endpoint: Url,
    config: ClientConfig,
}

impl HttpListingSource {
    /// Creates a source for the server at `base_url`.
    ///
    /// # Errors
    /// - `GalleryError::InvalidEndpoint` - `base_url` is not an absolute URL
    /// - `GalleryError::Http` - HTTP client could not be built
    pub fn new(base_url: &str, config: ClientConfig) -> Result<Self, GalleryError> {
        let invalid = |reason: String| GalleryError::InvalidEndpoint {
            url: base_url.to_string(),
            reason,
        };

        let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join("images").map_err(|e| invalid(e.to_string()))?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    /// Listing endpoint URL requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn page_url(&self, query: &PageQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("category", query.category.as_str())
                .append_pair("page", &query.page.to_string());
            if let Some(limit) = self.config.page_size {
                pairs.append_pair("limit", &limit.to_string());
            }
        }
        url
    }

    fn album_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        if let Some(limit) = self.config.page_size {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, GalleryError> {
        tracing::debug!(%url, "Fetching listing");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(GalleryError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch_album(&self) -> Result<AlbumListing, GalleryError> {
        self.get_json(self.album_url()).await
    }

    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResult, GalleryError> {
        self.get_json(self.page_url(query)).await
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::category::Category;

    fn query(category: &str, page: u32) -> PageQuery {
        PageQuery {
            category: Category::parse(category).unwrap(),
            page: NonZeroU32::new(page).unwrap(),
        }
    }

    #[test]
    fn test_endpoint_joins_base_path() {
        let source = HttpListingSource::new("http://localhost:3000", ClientConfig::default()).unwrap();
        assert_eq!(source.endpoint().as_str(), "http://localhost:3000/images");

        let nested =
            HttpListingSource::new("http://example.com/album", ClientConfig::default()).unwrap();
        assert_eq!(nested.endpoint().as_str(), "http://example.com/album/images");
    }

    #[test]
    fn test_rejects_relative_base() {
        let result = HttpListingSource::new("not a url", ClientConfig::default());
        assert!(matches!(result, Err(GalleryError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_request_urls() {
        let source = HttpListingSource::new("http://localhost:3000", ClientConfig::default()).unwrap();
        assert_eq!(
            source.page_url(&query("reception", 2)).as_str(),
            "http://localhost:3000/images?category=reception&page=2"
        );
        assert_eq!(source.album_url().as_str(), "http://localhost:3000/images");

        let sized = HttpListingSource::new(
            "http://localhost:3000",
            ClientConfig {
                page_size: NonZeroU32::new(10),
                ..ClientConfig::default()
            },
        )
        .unwrap();
        assert_eq!(
            sized.page_url(&query("reception", 3)).as_str(),
            "http://localhost:3000/images?category=reception&page=3&limit=10"
        );
        assert_eq!(sized.album_url().as_str(), "http://localhost:3000/images?limit=10");
    }
}
