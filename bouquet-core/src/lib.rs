//! Bouquet Core - Photo listing, pagination and gallery state
//!
//! This crate provides the building blocks of the photo album: category
//! configuration, folder listing, page slicing, the client-side gallery
//! that accumulates pages, and slideshow/lightbox navigation.

pub mod category;
pub mod config;
pub mod gallery;
pub mod library;
pub mod tracing_setup;
pub mod viewer;

// Re-export main types for convenient access
pub use category::{Category, CategorySet};
pub use config::{BouquetConfig, ConfigError};
pub use gallery::{Gallery, GalleryError, GalleryState, HttpListingSource, ListingSource};
pub use library::{AlbumListing, ImageLibrary, LibraryError, PageRequest, PageResult};

/// Core errors that can bubble up from any Bouquet subsystem.
#[derive(Debug, thiserror::Error)]
pub enum BouquetError {
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Gallery error: {0}")]
    Gallery(#[from] GalleryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BouquetError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            BouquetError::Library(_) => "Failed to load images".to_string(),
            BouquetError::Gallery(GalleryError::Status { status, message }) => {
                format!("Server error {status}: {message}")
            }
            BouquetError::Gallery(GalleryError::InvalidEndpoint { url, .. }) => {
                format!("Invalid server address: {url}")
            }
            BouquetError::Gallery(_) => "Could not reach the photo server".to_string(),
            BouquetError::Config(e) => e.to_string(),
            BouquetError::Io(_) => "File system error occurred".to_string(),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            BouquetError::Config(_) | BouquetError::Gallery(GalleryError::InvalidEndpoint { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, BouquetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_io_details() {
        let error = BouquetError::from(LibraryError::Io {
            category: "reception".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/srv/secret"),
        });
        assert_eq!(error.user_message(), "Failed to load images");
        assert!(!error.is_user_error());

        let error = BouquetError::from(ConfigError::NoCategories);
        assert!(error.is_user_error());
    }
}
