//! Per-category accumulator with its pagination cursor.

use std::num::NonZeroU32;

use crate::library::PageResult;

/// Loading state of one category feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    /// Ready to fetch the next page
    Idle,
    /// A page request is in flight
    Loading,
    /// The server reported no further pages
    Exhausted,
}

/// Append-only list of image references fetched for one category.
///
/// `page` is the last page merged in (0 before anything arrived). Only
/// successful fetch completions mutate the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFeed {
    images: Vec<String>,
    page: u32,
    total: usize,
    has_more: bool,
    pending: Option<NonZeroU32>,
}

impl CategoryFeed {
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn status(&self) -> FeedStatus {
        if self.pending.is_some() {
            FeedStatus::Loading
        } else if self.has_more {
            FeedStatus::Idle
        } else {
            FeedStatus::Exhausted
        }
    }

    /// Replaces the feed with the first page of a combined listing.
    pub(crate) fn seed(&mut self, result: PageResult) {
        self.images = result.images;
        self.total = result.total;
        self.has_more = result.has_more;
        self.page = 1;
    }

    /// Marks the next page as requested and returns its number.
    ///
    /// Returns `None` while a request is pending or when nothing is left.
    pub(crate) fn begin(&mut self) -> Option<NonZeroU32> {
        if self.status() != FeedStatus::Idle {
            return None;
        }
        let next = NonZeroU32::new(self.page.saturating_add(1))?;
        self.pending = Some(next);
        Some(next)
    }

    /// Appends a fetched page and advances the cursor to the requested page.
    ///
    /// Returns the number of images appended, or `None` when no request was
    /// pending.
    pub(crate) fn complete(&mut self, result: PageResult) -> Option<usize> {
        let requested = self.pending.take()?;
        let added = result.images.len();
        self.images.extend(result.images);
        self.total = result.total;
        self.has_more = result.has_more;
        self.page = requested.get();
        Some(added)
    }

    /// Drops the pending request without moving the cursor.
    pub(crate) fn fail(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(images: &[&str], total: usize, has_more: bool, page: u32) -> PageResult {
        PageResult {
            images: images.iter().map(|s| s.to_string()).collect(),
            total,
            has_more,
            page,
        }
    }

    #[test]
    fn test_fresh_feed_is_exhausted() {
        let mut feed = CategoryFeed::default();
        assert_eq!(feed.status(), FeedStatus::Exhausted);
        assert_eq!(feed.begin(), None);
    }

    #[test]
    fn test_begin_complete_cycle() {
        let mut feed = CategoryFeed::default();
        feed.seed(page(&["a", "b"], 3, true, 1));
        assert_eq!(feed.status(), FeedStatus::Idle);

        let next = feed.begin().unwrap();
        assert_eq!(next.get(), 2);
        assert_eq!(feed.status(), FeedStatus::Loading);
        assert_eq!(feed.begin(), None);

        assert_eq!(feed.complete(page(&["c"], 3, false, 2)), Some(1));
        assert_eq!(feed.images(), ["a", "b", "c"]);
        assert_eq!(feed.page(), 2);
        assert_eq!(feed.status(), FeedStatus::Exhausted);
    }

    #[test]
    fn test_failure_keeps_cursor() {
        let mut feed = CategoryFeed::default();
        feed.seed(page(&["a"], 2, true, 1));

        assert_eq!(feed.begin().map(NonZeroU32::get), Some(2));
        feed.fail();
        assert_eq!(feed.page(), 1);
        assert_eq!(feed.status(), FeedStatus::Idle);
        assert_eq!(feed.begin().map(NonZeroU32::get), Some(2));
    }

    #[test]
    fn test_complete_without_request_is_ignored() {
        let mut feed = CategoryFeed::default();
        feed.seed(page(&["a"], 2, true, 1));

        assert_eq!(feed.complete(page(&["b"], 2, false, 2)), None);
        assert_eq!(feed.images(), ["a"]);
    }
}
