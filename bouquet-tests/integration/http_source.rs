//! HTTP listing source against the real endpoint.

use std::num::NonZeroU32;

use bouquet_core::Category;
use bouquet_core::config::ClientConfig;
use bouquet_core::gallery::{GalleryError, HttpListingSource, ListingSource, PageQuery};

use crate::harness::TestServer;

fn query(category: &str, page: u32) -> PageQuery {
    PageQuery {
        category: Category::parse(category).unwrap(),
        page: NonZeroU32::new(page).unwrap(),
    }
}

#[tokio::test]
async fn test_fetches_album_and_pages() {
    let server = TestServer::start(&[("reception", 45)]).await;
    let source = HttpListingSource::new(&server.base_url, ClientConfig::default()).unwrap();

    let album = source.fetch_album().await.unwrap();
    let names: Vec<&str> = album.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(names, ["first-ceremony", "second-ceremony", "reception"]);

    let page = source.fetch_page(&query("reception", 2)).await.unwrap();
    assert_eq!(page.images.len(), 15);
    assert_eq!(page.total, 45);
    assert!(!page.has_more);
    assert_eq!(page.page, 2);
}

#[tokio::test]
async fn test_page_size_is_sent() {
    let server = TestServer::start(&[("reception", 45)]).await;
    let config = ClientConfig {
        page_size: NonZeroU32::new(20),
        ..ClientConfig::default()
    };
    let source = HttpListingSource::new(&server.base_url, config).unwrap();

    let page = source.fetch_page(&query("reception", 3)).await.unwrap();
    assert_eq!(page.images.len(), 5);
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_server_error_is_typed() {
    let root = bouquet_core::library::test_fixtures::create_photo_root();
    std::fs::write(root.path().join("reception"), b"not a directory").unwrap();
    let server = TestServer::start_at(root).await;
    let source = HttpListingSource::new(&server.base_url, ClientConfig::default()).unwrap();

    match source.fetch_page(&query("reception", 2)).await {
        Err(GalleryError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to load images");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpListingSource::new(&format!("http://{addr}"), ClientConfig::default()).unwrap();
    assert!(matches!(
        source.fetch_album().await,
        Err(GalleryError::Http(_))
    ));
}
