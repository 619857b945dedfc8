//! API handlers for photo listings

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use bouquet_core::{LibraryError, PageRequest};
use serde_json::json;
use tracing::error;

use crate::server::AppState;

/// Failure of a listing request.
///
/// Details are logged server-side; the client only sees a generic message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Library(#[from] LibraryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Error loading images: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to load images" })),
        )
            .into_response()
    }
}

/// `GET /images?category=&page=&limit=`
///
/// With a category, returns that category's page. Without one, returns the
/// first page of every category keyed by identifier. Unusable `page` and
/// `limit` values fall back to the defaults.
///
/// # Errors
/// - `ApiError::Library` - A category folder could not be read
pub async fn api_images(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let request = PageRequest::from_query(
        params.get("page").map(String::as_str),
        params.get("limit").map(String::as_str),
        state.library.default_page_size(),
    );

    match params.get("category").filter(|c| !c.is_empty()) {
        Some(category) => {
            let result = state.library.category_page(category, request).await?;
            Ok(Json(result).into_response())
        }
        None => {
            let album = state.library.first_pages(request.limit).await?;
            Ok(Json(album).into_response())
        }
    }
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
