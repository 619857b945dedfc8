//! Photo categories and the ordered set the album is built from.
//!
//! A category identifier doubles as the name of its subdirectory under the
//! photo root, so identifiers are restricted to a single safe path component.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Identifiers of the default wedding album, in display order.
pub const WEDDING_CATEGORIES: [&str; 3] = ["first-ceremony", "second-ceremony", "reception"];

/// Identifier of one photo grouping, mapped 1:1 to a subdirectory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Validates and wraps a category identifier.
    ///
    /// # Errors
    /// - `ConfigError::InvalidCategory` - Identifier is empty or contains
    ///   characters outside `[a-z0-9_-]`
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let valid = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');

        if valid {
            Ok(Self(name.to_string()))
        } else {
            Err(ConfigError::InvalidCategory {
                name: name.to_string(),
            })
        }
    }

    /// Identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Category {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

/// Ordered, duplicate-free set of categories an album is made of.
///
/// Passed explicitly to both the listing service and the gallery state so the
/// category list lives in configuration rather than in scattered literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Builds a set from already validated categories.
    ///
    /// # Errors
    /// - `ConfigError::NoCategories` - The list is empty
    /// - `ConfigError::DuplicateCategory` - The same identifier appears twice
    pub fn new(categories: Vec<Category>) -> Result<Self, ConfigError> {
        if categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        for (index, category) in categories.iter().enumerate() {
            if categories[..index].contains(category) {
                return Err(ConfigError::DuplicateCategory {
                    name: category.to_string(),
                });
            }
        }

        Ok(Self { categories })
    }

    /// Parses a comma-separated identifier list such as `"a,b,c"`.
    ///
    /// Surrounding whitespace and empty segments are ignored.
    ///
    /// # Errors
    /// - `ConfigError::InvalidCategory` - A segment is not a valid identifier
    /// - `ConfigError::NoCategories` - No segment remained
    /// - `ConfigError::DuplicateCategory` - A segment is repeated
    pub fn parse_list(list: &str) -> Result<Self, ConfigError> {
        let categories = list
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(Category::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(categories)
    }

    /// The three-part wedding album: both ceremonies and the reception.
    pub fn wedding() -> Self {
        Self {
            categories: WEDDING_CATEGORIES
                .iter()
                .map(|name| Category(name.to_string()))
                .collect(),
        }
    }

    /// Looks up a configured category by identifier.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Categories in configured order.
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::wedding()
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_rejects_path_components() {
        assert!(Category::parse("reception").is_ok());
        assert!(Category::parse("day_2-evening").is_ok());

        for bad in ["", "..", "a/b", "Reception", "a b", "../etc"] {
            assert!(
                matches!(Category::parse(bad), Err(ConfigError::InvalidCategory { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_wedding_set_order() {
        let set = CategorySet::wedding();
        let names: Vec<&str> = set.iter().map(Category::as_str).collect();
        assert_eq!(names, WEDDING_CATEGORIES);
        assert!(set.contains("reception"));
        assert!(!set.contains("afterparty"));
    }

    #[test]
    fn test_parse_list() {
        let set = CategorySet::parse_list(" ceremony , , party ").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("party").map(Category::as_str), Some("party"));

        assert!(matches!(
            CategorySet::parse_list(" , "),
            Err(ConfigError::NoCategories)
        ));
        assert!(matches!(
            CategorySet::parse_list("a,b,a"),
            Err(ConfigError::DuplicateCategory { .. })
        ));
    }

    #[test]
    fn test_category_serde_validates() {
        let category: Category = serde_json::from_str("\"reception\"").unwrap();
        assert_eq!(category.as_str(), "reception");
        assert!(serde_json::from_str::<Category>("\"../secret\"").is_err());
    }
}
