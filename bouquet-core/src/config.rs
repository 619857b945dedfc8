//! Centralized configuration for Bouquet.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use crate::category::CategorySet;

/// Page size used when a request does not carry a usable `limit`.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = NonZeroU32::new(30).unwrap();

/// Central configuration for all Bouquet components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct BouquetConfig {
    pub server: ServerConfig,
    pub library: LibraryConfig,
    pub client: ClientConfig,
    pub viewer: ViewerConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub host: String,
    /// TCP port the listener binds to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Photo library layout on disk and on the wire.
///
/// Controls where category folders live, how image references are built,
/// and the default page size of listing responses.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Directory holding one subdirectory per category
    pub photo_root: PathBuf,
    /// URL path under which the photo root is served
    pub url_prefix: String,
    /// Categories of the album, in display order
    pub categories: CategorySet,
    /// Page size used when a request omits `limit`
    pub default_page_size: NonZeroU32,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            photo_root: PathBuf::from("public/images/wedding"),
            url_prefix: "/images/wedding".to_string(),
            categories: CategorySet::wedding(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Gallery client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User agent for listing requests
    pub user_agent: &'static str,
    /// Page size sent with requests (None = server default)
    pub page_size: Option<NonZeroU32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: "bouquet/0.1.0",
            page_size: None,
        }
    }
}

/// Slideshow and lightbox behavior.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Delay between automatic slideshow advances
    pub slideshow_interval: Duration,
    /// Whether the slideshow starts playing on its own
    pub autoplay: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            slideshow_interval: Duration::from_millis(4000),
            autoplay: true,
        }
    }
}

/// Errors raised while assembling or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid category identifier '{name}': expected [a-z0-9_-]+")]
    InvalidCategory { name: String },

    #[error("Category '{name}' is listed more than once")]
    DuplicateCategory { name: String },

    #[error("At least one category must be configured")]
    NoCategories,

    #[error("URL prefix '{prefix}' must start with '/'")]
    InvalidUrlPrefix { prefix: String },

    #[error("URL prefix '{prefix}' collides with an API route")]
    ReservedUrlPrefix { prefix: String },
}

/// API paths the photo URL prefix must not shadow.
pub const RESERVED_PATHS: [&str; 3] = ["/images", "/api/images", "/health"];

impl BouquetConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults. Values that fail to parse are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("BOUQUET_HOST")
            && !host.trim().is_empty()
        {
            config.server.host = host.trim().to_string();
        }

        if let Ok(port) = std::env::var("BOUQUET_PORT")
            && let Ok(port) = port.trim().parse::<u16>()
        {
            config.server.port = port;
        }

        if let Ok(root) = std::env::var("BOUQUET_PHOTO_ROOT")
            && !root.is_empty()
        {
            config.library.photo_root = PathBuf::from(root);
        }

        if let Ok(prefix) = std::env::var("BOUQUET_URL_PREFIX")
            && !prefix.is_empty()
        {
            config.library.url_prefix = prefix;
        }

        if let Ok(size) = std::env::var("BOUQUET_PAGE_SIZE")
            && let Ok(size) = size.trim().parse::<NonZeroU32>()
        {
            config.library.default_page_size = size;
        }

        if let Ok(list) = std::env::var("BOUQUET_CATEGORIES") {
            match CategorySet::parse_list(&list) {
                Ok(categories) => config.library.categories = categories,
                Err(e) => tracing::warn!("Ignoring BOUQUET_CATEGORIES: {e}"),
            }
        }

        config
    }

    /// Checks cross-field constraints the individual types cannot express.
    ///
    /// # Errors
    /// - `ConfigError::InvalidUrlPrefix` - Prefix is not an absolute URL path
    /// - `ConfigError::ReservedUrlPrefix` - Prefix equals an API route
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.library.url_prefix;
        if !prefix.starts_with('/') {
            return Err(ConfigError::InvalidUrlPrefix {
                prefix: prefix.clone(),
            });
        }
        if RESERVED_PATHS.contains(&prefix.trim_end_matches('/')) {
            return Err(ConfigError::ReservedUrlPrefix {
                prefix: prefix.clone(),
            });
        }
        Ok(())
    }
}
