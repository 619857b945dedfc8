//! CLI command implementations

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use bouquet_core::config::BouquetConfig;
use bouquet_core::gallery::{Gallery, HttpListingSource, LoadOutcome};
use bouquet_core::{BouquetError, CategorySet, ImageLibrary, PageRequest};
use clap::Subcommand;
use futures::future::join_all;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the photo album server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory holding one folder per category
        #[arg(short, long)]
        root: Option<PathBuf>,
        /// URL path the photos are served under
        #[arg(long)]
        url_prefix: Option<String>,
        /// Comma-separated category identifiers, in display order
        #[arg(long)]
        categories: Option<String>,
        /// Default page size of listing responses
        #[arg(long)]
        page_size: Option<NonZeroU32>,
    },
    /// Print a listing as the server would return it
    List {
        /// Category to page through; all categories when omitted
        category: Option<String>,
        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: NonZeroU32,
        /// Page size
        #[arg(short, long)]
        limit: Option<NonZeroU32>,
        /// Directory holding one folder per category
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
    /// Load an album from a running server through the gallery client
    Browse {
        /// Server base URL
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        url: String,
        /// Keep loading pages until every category is exhausted
        #[arg(long)]
        all: bool,
        /// Page size to request (server default when omitted)
        #[arg(long)]
        page_size: Option<NonZeroU32>,
        /// Comma-separated category identifiers the server uses
        #[arg(long)]
        categories: Option<String>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let mut config = BouquetConfig::from_env();

    match command {
        Commands::Serve {
            host,
            port,
            root,
            url_prefix,
            categories,
            page_size,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(root) = root {
                config.library.photo_root = root;
            }
            if let Some(prefix) = url_prefix {
                config.library.url_prefix = prefix;
            }
            if let Some(list) = categories {
                config.library.categories = parse_categories(&list)?;
            }
            if let Some(size) = page_size {
                config.library.default_page_size = size;
            }
            serve(config).await
        }
        Commands::List {
            category,
            page,
            limit,
            root,
        } => {
            if let Some(root) = root {
                config.library.photo_root = root;
            }
            list(&config, category.as_deref(), page, limit).await
        }
        Commands::Browse {
            url,
            all,
            page_size,
            categories,
        } => {
            if let Some(list) = categories {
                config.library.categories = parse_categories(&list)?;
            }
            if page_size.is_some() {
                config.client.page_size = page_size;
            }
            browse(&config, &url, all).await
        }
    }
}

fn parse_categories(list: &str) -> anyhow::Result<CategorySet> {
    CategorySet::parse_list(list).map_err(|e| report(BouquetError::from(e)))
}

/// Converts a core error into a CLI error carrying its user-facing text.
fn report(error: BouquetError) -> anyhow::Error {
    tracing::debug!("{error:?}");
    anyhow::anyhow!(error.user_message())
}

/// Run the album server until interrupted
///
/// # Errors
/// - Configuration is invalid or the address cannot be bound
async fn serve(config: BouquetConfig) -> anyhow::Result<()> {
    println!(
        "Serving {} ({}) on http://{}",
        config.library.photo_root.display(),
        config
            .library
            .categories
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        config.server.bind_address()
    );
    bouquet_web::run_server(config).await.map_err(report)
}

/// Print one page of a category, or the first page of every category
///
/// # Errors
/// - A category folder could not be read
async fn list(
    config: &BouquetConfig,
    category: Option<&str>,
    page: NonZeroU32,
    limit: Option<NonZeroU32>,
) -> anyhow::Result<()> {
    let library = ImageLibrary::new(&config.library);
    let limit = limit.unwrap_or(library.default_page_size());

    let json = match category {
        Some(name) => {
            if !library.categories().contains(name) {
                tracing::warn!("'{name}' is not a configured category");
            }
            let result = library
                .category_page(name, PageRequest::new(page, limit))
                .await
                .map_err(|e| report(e.into()))?;
            serde_json::to_string_pretty(&result)?
        }
        None => {
            let album = library
                .first_pages(limit)
                .await
                .map_err(|e| report(e.into()))?;
            serde_json::to_string_pretty(&album)?
        }
    };

    println!("{json}");
    Ok(())
}

/// Mount a gallery against a running server and report each category
///
/// # Errors
/// - The server URL is invalid or the initial listing could not be loaded
async fn browse(config: &BouquetConfig, url: &str, all: bool) -> anyhow::Result<()> {
    let source = HttpListingSource::new(url, config.client.clone())
        .map_err(|e| report(e.into()))?;
    println!("Browsing {}", source.endpoint());

    let gallery = Gallery::new(&config.library.categories, Arc::new(source));
    if gallery.mount().await == LoadOutcome::Failed {
        bail!("Could not load the album from {url}");
    }

    if all {
        let loads = config
            .library
            .categories
            .iter()
            .map(|category| gallery.load_all(category.as_str()));
        join_all(loads).await;
    }

    let state = gallery.snapshot();
    for (category, feed) in state.feeds() {
        let label = state
            .progress_label(category.as_str())
            .context("category vanished from gallery state")?;
        let status = if feed.has_more() { label } else { "complete".to_string() };
        println!(
            "  {category}: {} of {} images, page {} ({status})",
            feed.images().len(),
            feed.total(),
            feed.page(),
        );
    }
    println!("Slideshow: {} images", state.all_images().len());

    Ok(())
}
