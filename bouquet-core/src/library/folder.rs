//! Category folder listing

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::LibraryError;
use crate::category::Category;

/// File extensions served as photos, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Checks whether a filename carries one of the supported image extensions.
pub fn is_supported_image(file_name: &str) -> bool {
    file_name.rsplit_once('.').is_some_and(|(_, ext)| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    })
}

/// Lists the image filenames of one category folder, sorted ascending.
///
/// A missing folder yields an empty list so an unused category degrades
/// quietly. The directory is re-read on every call.
///
/// # Errors
/// - `LibraryError::Io` - Folder exists but could not be read
pub async fn list_folder(root: &Path, category: &Category) -> Result<Vec<String>, LibraryError> {
    let dir = root.join(category.as_str());
    let io_error = |source| LibraryError::Io {
        category: category.to_string(),
        source,
    };

    let mut entries = match tokio::fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(category = %category, path = %dir.display(), "Category folder missing");
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_error(e)),
    };

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
        if entry.file_type().await.map_err(io_error)?.is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) if is_supported_image(&name) => files.push(name),
            Ok(_) => {}
            Err(raw) => debug!(category = %category, name = ?raw, "Skipping non UTF-8 filename"),
        }
    }

    files.sort_unstable();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::test_fixtures::{create_category, create_photo_root};

    #[test]
    fn test_extension_allow_list() {
        for name in ["a.jpg", "b.JPEG", "B.PNG", "c.Gif", "d.webp", ".jpg", "x.y.jpg"] {
            assert!(is_supported_image(name), "{name} should be accepted");
        }
        for name in ["a.txt", "jpg", "photo.jpg.bak", "raw.cr2", "noext", "a.jpgx"] {
            assert!(!is_supported_image(name), "{name} should be rejected");
        }
    }

    #[tokio::test]
    async fn test_lists_sorted_images_only() {
        let root = create_photo_root();
        create_category(root.path(), "reception", &["c.webp", "B.PNG", "a.txt", "a.jpg"]);
        std::fs::create_dir(root.path().join("reception").join("nested.jpg")).unwrap();

        let category = Category::parse("reception").unwrap();
        let files = list_folder(root.path(), &category).await.unwrap();

        assert_eq!(files, vec!["B.PNG", "a.jpg", "c.webp"]);
    }

    #[tokio::test]
    async fn test_missing_folder_is_empty() {
        let root = create_photo_root();
        let category = Category::parse("first-ceremony").unwrap();

        let files = list_folder(root.path(), &category).await.unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_folder_is_error() {
        let root = create_photo_root();
        std::fs::write(root.path().join("reception"), b"not a directory").unwrap();

        let category = Category::parse("reception").unwrap();
        let result = list_folder(root.path(), &category).await;

        assert!(matches!(result, Err(LibraryError::Io { .. })));
    }
}
