//! Gallery reducer: all category feeds of one album session.

use std::num::NonZeroU32;

use super::feed::{CategoryFeed, FeedStatus};
use crate::category::{Category, CategorySet};
use crate::library::{AlbumListing, PageResult};

/// Request for one further page of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub category: Category,
    pub page: NonZeroU32,
}

/// Client-side album state, one feed per configured category.
///
/// Transitions are plain method calls so the state can be driven by any
/// event loop. Feeds are independent: a pending request in one category
/// never blocks another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    feeds: Vec<(Category, CategoryFeed)>,
}

impl GalleryState {
    pub fn new(categories: &CategorySet) -> Self {
        Self {
            feeds: categories
                .iter()
                .map(|c| (c.clone(), CategoryFeed::default()))
                .collect(),
        }
    }

    /// Seeds every known category from a combined first-page listing.
    ///
    /// Categories missing from the listing are left untouched and entries
    /// for unknown categories are ignored.
    pub fn seed(&mut self, listing: AlbumListing) {
        for (category, feed) in &mut self.feeds {
            if let Some(result) = listing.get(category) {
                feed.seed(result.clone());
            }
        }
    }

    /// Starts loading the next page of `category`.
    ///
    /// Returns `None` when the category is unknown, already loading or has
    /// no further pages; the caller must not issue a request in that case.
    pub fn begin_load(&mut self, category: &str) -> Option<PageQuery> {
        let (category, feed) = self.entry_mut(category)?;
        let page = feed.begin()?;
        Some(PageQuery {
            category: category.clone(),
            page,
        })
    }

    /// Merges a fetched page into the category feed.
    ///
    /// Returns the number of appended images, or `None` when no load was
    /// pending for the category.
    pub fn complete_load(&mut self, category: &str, result: PageResult) -> Option<usize> {
        self.entry_mut(category)?.1.complete(result)
    }

    /// Ends a failed load; the next attempt requests the same page.
    pub fn fail_load(&mut self, category: &str) {
        if let Some((_, feed)) = self.entry_mut(category) {
            feed.fail();
        }
    }

    pub fn feed(&self, category: &str) -> Option<&CategoryFeed> {
        self.feeds
            .iter()
            .find(|(c, _)| c.as_str() == category)
            .map(|(_, feed)| feed)
    }

    pub fn feeds(&self) -> impl Iterator<Item = (&Category, &CategoryFeed)> {
        self.feeds.iter().map(|(c, feed)| (c, feed))
    }

    /// Every fetched image, categories in configured order.
    pub fn all_images(&self) -> Vec<String> {
        self.feeds
            .iter()
            .flat_map(|(_, feed)| feed.images().iter().cloned())
            .collect()
    }

    /// Text for a category's "load more" control.
    pub fn progress_label(&self, category: &str) -> Option<String> {
        let feed = self.feed(category)?;
        Some(match feed.status() {
            FeedStatus::Loading => "Loading...".to_string(),
            _ => format!("Load More ({} of {})", feed.images().len(), feed.total()),
        })
    }

    fn entry_mut(&mut self, category: &str) -> Option<(&Category, &mut CategoryFeed)> {
        self.feeds
            .iter_mut()
            .find(|(c, _)| c.as_str() == category)
            .map(|(c, feed)| (&*c, feed))
    }
}
