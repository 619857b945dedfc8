//! Async driver tying the gallery reducer to a listing source.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::feed::CategoryFeed;
use super::source::ListingSource;
use super::state::GalleryState;
use crate::category::CategorySet;

/// What a gallery fetch did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No request was issued: already loading, exhausted or unknown category
    Skipped,
    /// Request succeeded and this many images were added
    Appended(usize),
    /// Request failed; state is unchanged apart from clearing the loading flag
    Failed,
}

/// Album session that fetches pages on demand.
///
/// Cloning yields another handle to the same session. The state lock is
/// never held across a request, so loads of different categories proceed
/// concurrently.
#[derive(Debug, Clone)]
pub struct Gallery {
    state: Arc<Mutex<GalleryState>>,
    source: Arc<dyn ListingSource>,
}

impl Gallery {
    pub fn new(categories: &CategorySet, source: Arc<dyn ListingSource>) -> Self {
        Self {
            state: Arc::new(Mutex::new(GalleryState::new(categories))),
            source,
        }
    }

    /// Loads the first page of every category with one combined request.
    ///
    /// Failures are logged and leave the gallery empty.
    pub async fn mount(&self) -> LoadOutcome {
        match self.source.fetch_album().await {
            Ok(listing) => {
                let count: usize = listing.iter().map(|(_, r)| r.images.len()).sum();
                self.state.lock().seed(listing);
                debug!(images = count, "Gallery mounted");
                LoadOutcome::Appended(count)
            }
            Err(e) => {
                warn!("Error fetching album listing: {e}");
                LoadOutcome::Failed
            }
        }
    }

    /// Fetches the next page of `category` and appends it.
    ///
    /// Calls made while the category is loading or exhausted issue no
    /// request. A failed fetch is logged and can be retried with the same
    /// call.
    pub async fn load_more(&self, category: &str) -> LoadOutcome {
        let Some(query) = self.state.lock().begin_load(category) else {
            return LoadOutcome::Skipped;
        };

        match self.source.fetch_page(&query).await {
            Ok(result) => {
                let added = self.state.lock().complete_load(category, result);
                LoadOutcome::Appended(added.unwrap_or(0))
            }
            Err(e) => {
                warn!("Error loading more {category} images: {e}");
                self.state.lock().fail_load(category);
                LoadOutcome::Failed
            }
        }
    }

    /// Keeps loading `category` until it is exhausted or a fetch fails.
    ///
    /// Returns the number of images appended.
    pub async fn load_all(&self, category: &str) -> usize {
        let mut appended = 0;
        while let LoadOutcome::Appended(added) = self.load_more(category).await {
            appended += added;
        }
        appended
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> GalleryState {
        self.state.lock().clone()
    }

    pub fn feed(&self, category: &str) -> Option<CategoryFeed> {
        self.state.lock().feed(category).cloned()
    }

    /// Every fetched image in category order, as fed to the slideshow.
    pub fn all_images(&self) -> Vec<String> {
        self.state.lock().all_images()
    }
}
