//! Photo library access.
//!
//! Lists category folders on disk and cuts the listings into pages. The
//! library is read-only: folders are populated by deployment tooling.

pub mod folder;
pub mod pagination;
pub mod service;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_fixtures;

pub use folder::{IMAGE_EXTENSIONS, is_supported_image, list_folder};
pub use pagination::{Page, PageRequest, paginate};
pub use service::{AlbumListing, ImageLibrary, PageResult};

/// Errors that occur while reading the photo library.
///
/// A missing category folder is not an error; it lists as empty.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// Category folder exists but could not be read
    #[error("Failed to read category '{category}': {source}")]
    Io {
        /// Category whose folder failed
        category: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}
