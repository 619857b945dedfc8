//! HTTP server for the photo album
//!
//! Serves the JSON listing endpoint and the photo files themselves.

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use bouquet_core::config::BouquetConfig;
use bouquet_core::{ImageLibrary, Result};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::handlers::{api_images, health};

/// Shared state handed to every handler. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<ImageLibrary>,
}

impl AppState {
    pub fn new(config: &BouquetConfig) -> Self {
        Self {
            library: Arc::new(ImageLibrary::new(&config.library)),
        }
    }
}

/// Builds the application router.
///
/// Listing routes are registered before the photo directory is mounted so
/// they always take precedence.
pub fn build_router(config: &BouquetConfig) -> Router {
    let state = AppState::new(config);
    let photos = ServeDir::new(&config.library.photo_root);
    let prefix = config.library.url_prefix.trim_end_matches('/');

    let router = Router::new()
        .route("/images", get(api_images))
        .route("/api/images", get(api_images))
        .route("/health", get(health))
        .with_state(state);

    let router = if prefix.is_empty() {
        router.fallback_service(photos)
    } else {
        router.nest_service(prefix, photos)
    };

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Turns a handler panic into the generic failure payload.
fn panic_response(details: Box<dyn Any + Send + 'static>) -> Response {
    let message = details
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| details.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Request handler panicked: {message}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to load images" })),
    )
        .into_response()
}

/// Serves the album on an already bound listener until the task is dropped.
///
/// # Errors
/// - `BouquetError::Config` - Configuration failed validation
/// - `BouquetError::Io` - Accept loop failed
pub async fn serve(listener: TcpListener, config: BouquetConfig) -> Result<()> {
    config.validate()?;
    let app = build_router(&config);

    if let Ok(addr) = listener.local_addr() {
        info!(
            "Bouquet photo album running on http://{addr} (photos from {})",
            config.library.photo_root.display()
        );
    }
    axum::serve(listener, app).await?;
    Ok(())
}

/// Binds the configured address and serves the album.
///
/// # Errors
/// - `BouquetError::Config` - Configuration failed validation
/// - `BouquetError::Io` - Address could not be bound or accept loop failed
pub async fn run_server(config: BouquetConfig) -> Result<()> {
    config.validate()?;
    let listener = TcpListener::bind(config.server.bind_address()).await?;
    serve(listener, config).await
}
