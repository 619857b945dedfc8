//! Page slicing over sorted listings.

use std::num::NonZeroU32;

use crate::config::DEFAULT_PAGE_SIZE;

/// One-indexed page position and page size.
///
/// Both fields are non-zero by construction, so slicing never has to
/// defend against a zero page or an empty page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: NonZeroU32,
    pub limit: NonZeroU32,
}

impl PageRequest {
    pub fn new(page: NonZeroU32, limit: NonZeroU32) -> Self {
        Self { page, limit }
    }

    /// First page with the given size.
    pub fn first(limit: NonZeroU32) -> Self {
        Self {
            page: NonZeroU32::MIN,
            limit,
        }
    }

    /// Builds a request from raw query values.
    ///
    /// Only the leading digits of each value count, so `2abc` is page 2.
    /// Missing, non-numeric or zero values fall back to page 1 and
    /// `default_limit` without reporting an error.
    pub fn from_query(page: Option<&str>, limit: Option<&str>, default_limit: NonZeroU32) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(NonZeroU32::MIN),
            limit: parse_positive(limit).unwrap_or(default_limit),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page.get() as usize - 1).saturating_mul(self.limit.get() as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<NonZeroU32> {
    let value = raw?.trim_start();
    let digits = value.len() - value.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    value[..digits].parse().ok()
}

/// A slice of a sorted listing plus the metadata needed to fetch the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Length of the full listing
    pub total: usize,
    /// Whether items exist beyond this page
    pub has_more: bool,
    pub page: u32,
}

impl<T> Page<T> {
    /// Converts the items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            has_more: self.has_more,
            page: self.page,
        }
    }
}

/// Cuts `request.page` out of `sorted`.
///
/// Pages past the end are empty rather than errors. Output depends only
/// on the inputs.
pub fn paginate<T: Clone>(sorted: &[T], request: PageRequest) -> Page<T> {
    let total = sorted.len();
    let start = request.offset();
    let end = start.saturating_add(request.limit.get() as usize);

    let items = sorted[start.min(total)..end.min(total)].to_vec();

    Page {
        items,
        total,
        has_more: end < total,
        page: request.page.get(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn request(page: u32, limit: u32) -> PageRequest {
        PageRequest::new(
            NonZeroU32::new(page).unwrap(),
            NonZeroU32::new(limit).unwrap(),
        )
    }

    #[test]
    fn test_forty_five_items_in_pages_of_thirty() {
        let items: Vec<u32> = (0..45).collect();

        let first = paginate(&items, request(1, 30));
        assert_eq!(first.items.len(), 30);
        assert_eq!(first.total, 45);
        assert!(first.has_more);
        assert_eq!(first.page, 1);

        let second = paginate(&items, request(2, 30));
        assert_eq!(second.items, (30..45).collect::<Vec<_>>());
        assert!(!second.has_more);

        let third = paginate(&items, request(3, 30));
        assert!(third.items.is_empty());
        assert_eq!(third.total, 45);
        assert!(!third.has_more);
    }

    #[test]
    fn test_exact_multiple_has_no_more() {
        let items: Vec<u32> = (0..60).collect();
        let second = paginate(&items, request(2, 30));
        assert_eq!(second.items.len(), 30);
        assert!(!second.has_more);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items = vec!["a"; 3];
        let page = paginate(&items, request(u32::MAX, u32::MAX));
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_query_coercion() {
        let default = NonZeroU32::new(30).unwrap();

        assert_eq!(
            PageRequest::from_query(None, None, default),
            request(1, 30)
        );
        assert_eq!(
            PageRequest::from_query(Some("abc"), Some(""), default),
            request(1, 30)
        );
        assert_eq!(
            PageRequest::from_query(Some("0"), Some("-5"), default),
            request(1, 30)
        );
        assert_eq!(
            PageRequest::from_query(Some(" 3 "), Some("12"), default),
            request(3, 12)
        );
        assert_eq!(
            PageRequest::from_query(Some("2abc"), Some("10px"), default),
            request(2, 10)
        );
        assert_eq!(
            PageRequest::from_query(Some("1.5"), Some("px10"), default),
            request(1, 30)
        );
        assert_eq!(
            PageRequest::from_query(Some("00"), Some("99999999999"), default),
            request(1, 30)
        );
    }

    proptest! {
        #[test]
        fn prop_page_length_matches_formula(len in 0usize..200, page in 1u32..20, limit in 1u32..50) {
            let items: Vec<usize> = (0..len).collect();
            let result = paginate(&items, request(page, limit));

            let skipped = (page as usize - 1) * limit as usize;
            let expected = (limit as usize).min(len.saturating_sub(skipped));
            prop_assert_eq!(result.items.len(), expected);
            prop_assert_eq!(result.has_more, skipped + result.items.len() < len);
        }

        #[test]
        fn prop_has_more_iff_next_page_nonempty(len in 0usize..200, page in 1u32..20, limit in 1u32..50) {
            let items: Vec<usize> = (0..len).collect();
            let current = paginate(&items, request(page, limit));
            let next = paginate(&items, request(page + 1, limit));

            prop_assert_eq!(current.has_more, !next.items.is_empty());
        }
    }
}
