//! Integration tests for the listing service and the gallery reducer.
//!
//! These tests drive the public API end to end against a temporary photo
//! root: the library produces listings, the gallery state consumes them.

use std::num::NonZeroU32;

use bouquet_core::config::LibraryConfig;
use bouquet_core::gallery::{FeedStatus, GalleryState};
use bouquet_core::library::test_fixtures::{
    create_category, create_category_with_count, create_photo_root,
};
use bouquet_core::{CategorySet, ImageLibrary, PageRequest};

/// Test fixture holding a temporary photo root and a library over it.
struct LibraryTestFixture {
    _root: tempfile::TempDir,
    library: ImageLibrary,
}

impl LibraryTestFixture {
    fn new(counts: &[(&str, usize)]) -> Self {
        let root = create_photo_root();
        for (category, count) in counts {
            create_category_with_count(root.path(), category, *count);
        }

        let library = ImageLibrary::new(&LibraryConfig {
            photo_root: root.path().to_path_buf(),
            ..LibraryConfig::default()
        });

        Self {
            _root: root,
            library,
        }
    }
}

#[tokio::test]
async fn test_gallery_state_consumes_library_pages() {
    let fixture = LibraryTestFixture::new(&[("second-ceremony", 5), ("reception", 45)]);
    let limit = NonZeroU32::new(30).unwrap();

    let mut state = GalleryState::new(fixture.library.categories());
    state.seed(fixture.library.first_pages(limit).await.unwrap());

    let first = state.feed("first-ceremony").unwrap();
    assert!(first.images().is_empty());
    assert_eq!(first.total(), 0);
    assert!(!first.has_more());

    let query = state.begin_load("reception").unwrap();
    let page = fixture
        .library
        .category_page(query.category.as_str(), PageRequest::new(query.page, limit))
        .await
        .unwrap();
    assert_eq!(state.complete_load("reception", page), Some(15));

    let reception = state.feed("reception").unwrap();
    assert_eq!(reception.images().len(), 45);
    assert_eq!(reception.status(), FeedStatus::Exhausted);
    assert!(reception.images().windows(2).all(|w| w[0] < w[1]));
    assert_eq!(state.all_images().len(), 50);
}

#[tokio::test]
async fn test_custom_category_set() {
    let root = create_photo_root();
    create_category(root.path(), "portraits", &["b.jpeg", "a.GIF", "notes.md"]);

    let library = ImageLibrary::new(&LibraryConfig {
        photo_root: root.path().to_path_buf(),
        url_prefix: "/photos/".to_string(),
        categories: CategorySet::parse_list("portraits").unwrap(),
        default_page_size: NonZeroU32::new(1).unwrap(),
    });

    let page = library
        .category_page("portraits", PageRequest::first(library.default_page_size()))
        .await
        .unwrap();
    assert_eq!(page.images, vec!["/photos/portraits/a.GIF"]);
    assert_eq!(page.total, 2);
    assert!(page.has_more);

    let album = library.first_pages(NonZeroU32::new(10).unwrap()).await.unwrap();
    assert_eq!(album.len(), 1);
}
