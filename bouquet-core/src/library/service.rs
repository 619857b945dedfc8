//! Listing service combining folder listing and pagination.

use std::fmt;
use std::num::NonZeroU32;
use std::path::PathBuf;

use futures::future::try_join_all;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use super::LibraryError;
use super::folder::list_folder;
use super::pagination::{Page, PageRequest, paginate};
use crate::category::{Category, CategorySet};
use crate::config::LibraryConfig;

/// One page of image references as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub images: Vec<String>,
    pub total: usize,
    pub has_more: bool,
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}

impl PageResult {
    /// Result for a category with no photos at the given page.
    pub fn empty(page: u32) -> Self {
        Self {
            images: Vec::new(),
            total: 0,
            has_more: false,
            page,
        }
    }
}

impl From<Page<String>> for PageResult {
    fn from(page: Page<String>) -> Self {
        Self {
            images: page.items,
            total: page.total,
            has_more: page.has_more,
            page: page.page,
        }
    }
}

/// First page of every category, keyed by category identifier.
///
/// Serializes as a JSON object whose keys keep category order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumListing {
    entries: Vec<(Category, PageResult)>,
}

impl AlbumListing {
    pub fn new(entries: Vec<(Category, PageResult)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, category: &Category) -> Option<&PageResult> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, result)| result)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &PageResult)> {
        self.entries.iter().map(|(c, result)| (c, result))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AlbumListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, result) in &self.entries {
            map.serialize_entry(category, result)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AlbumListing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AlbumVisitor;

        impl<'de> Visitor<'de> for AlbumVisitor {
            type Value = AlbumListing;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from category to page result")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((category, result)) = access.next_entry()? {
                    entries.push((category, result));
                }
                Ok(AlbumListing { entries })
            }
        }

        deserializer.deserialize_map(AlbumVisitor)
    }
}

/// Read-only view of the photo library on disk.
///
/// Holds no mutable state; every call lists the folders afresh.
#[derive(Debug, Clone)]
pub struct ImageLibrary {
    photo_root: PathBuf,
    url_prefix: String,
    categories: CategorySet,
    default_page_size: NonZeroU32,
}

impl ImageLibrary {
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            photo_root: config.photo_root.clone(),
            url_prefix: config.url_prefix.trim_end_matches('/').to_string(),
            categories: config.categories.clone(),
            default_page_size: config.default_page_size,
        }
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn default_page_size(&self) -> NonZeroU32 {
        self.default_page_size
    }

    /// Returns one page of a category.
    ///
    /// Names outside the configured set never touch the filesystem and
    /// list as empty, the same as a category whose folder is missing.
    ///
    /// # Errors
    /// - `LibraryError::Io` - Category folder could not be read
    pub async fn category_page(
        &self,
        name: &str,
        request: PageRequest,
    ) -> Result<PageResult, LibraryError> {
        let Some(category) = self.categories.get(name) else {
            debug!(category = name, "Listing requested for unknown category");
            return Ok(PageResult::empty(request.page.get()));
        };

        self.page_of(category, request).await
    }

    /// Returns the first page of every configured category.
    ///
    /// # Errors
    /// - `LibraryError::Io` - Any category folder could not be read
    pub async fn first_pages(&self, limit: NonZeroU32) -> Result<AlbumListing, LibraryError> {
        let request = PageRequest::first(limit);
        let pages = try_join_all(
            self.categories
                .iter()
                .map(|category| self.page_of(category, request)),
        )
        .await?;

        Ok(AlbumListing::new(
            self.categories.iter().cloned().zip(pages).collect(),
        ))
    }

    async fn page_of(
        &self,
        category: &Category,
        request: PageRequest,
    ) -> Result<PageResult, LibraryError> {
        let files = list_folder(&self.photo_root, category).await?;
        let page = paginate(&files, request).map(|file| self.image_ref(category, &file));
        Ok(page.into())
    }

    /// URL path under which a category file is served.
    pub fn image_ref(&self, category: &Category, file: &str) -> String {
        format!("{}/{}/{}", self.url_prefix, category, file)
    }
}
