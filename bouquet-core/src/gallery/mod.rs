//! Client-side gallery state.
//!
//! Accumulates image references per category as pages arrive from the
//! listing endpoint. [`GalleryState`] holds the transitions; [`Gallery`]
//! drives them against a [`ListingSource`].

pub mod client;
pub mod feed;
pub mod source;
pub mod state;

pub use client::{Gallery, LoadOutcome};
pub use feed::{CategoryFeed, FeedStatus};
pub use source::{HttpListingSource, ListingSource};
pub use state::{GalleryState, PageQuery};

/// Errors raised while fetching listings from the server.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// Request could not be sent or its body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Response body did not match the expected listing shape
    #[error("Invalid listing response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base URL could not be turned into a listing endpoint
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidEndpoint {
        /// URL as given
        url: String,
        /// Parse failure description
        reason: String,
    },
}
