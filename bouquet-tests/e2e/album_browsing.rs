//! Gallery session driven against a live server.

use std::sync::Arc;

use bouquet_core::CategorySet;
use bouquet_core::config::{ClientConfig, ViewerConfig};
use bouquet_core::gallery::{FeedStatus, Gallery, HttpListingSource, LoadOutcome};
use bouquet_core::viewer::{Lightbox, Slideshow, ViewerKey};

use crate::harness::TestServer;

async fn mounted_gallery(server: &TestServer) -> Gallery {
    let source = HttpListingSource::new(&server.base_url, ClientConfig::default()).unwrap();
    let gallery = Gallery::new(&CategorySet::wedding(), Arc::new(source));
    assert!(matches!(gallery.mount().await, LoadOutcome::Appended(_)));
    gallery
}

#[tokio::test]
async fn test_reception_loads_to_completion() {
    let server = TestServer::start(&[("second-ceremony", 3), ("reception", 45)]).await;
    let gallery = mounted_gallery(&server).await;

    let reception = gallery.feed("reception").unwrap();
    assert_eq!(reception.images().len(), 30);
    assert_eq!(reception.total(), 45);
    assert_eq!(reception.status(), FeedStatus::Idle);

    let (first, second) = tokio::join!(
        gallery.load_more("reception"),
        gallery.load_more("reception")
    );
    assert_eq!(first, LoadOutcome::Appended(15));
    assert_eq!(second, LoadOutcome::Skipped);

    let reception = gallery.feed("reception").unwrap();
    assert_eq!(reception.images().len(), 45);
    assert_eq!(reception.page(), 2);
    assert_eq!(reception.status(), FeedStatus::Exhausted);
    assert!(reception.images().windows(2).all(|w| w[0] < w[1]));

    let first_ceremony = gallery.feed("first-ceremony").unwrap();
    assert!(first_ceremony.images().is_empty());
    assert_eq!(gallery.load_more("first-ceremony").await, LoadOutcome::Skipped);
}

#[tokio::test]
async fn test_viewers_follow_loaded_images() {
    let server = TestServer::start(&[("first-ceremony", 2), ("reception", 31)]).await;
    let gallery = mounted_gallery(&server).await;

    let mut slideshow = Slideshow::new(gallery.all_images().len(), &ViewerConfig::default());
    assert_eq!(slideshow.carousel().len(), 32);

    gallery.load_all("reception").await;
    let images = gallery.all_images();
    slideshow.carousel_mut().set_len(images.len());
    slideshow.carousel_mut().jump_to(images.len() - 1);
    assert!(slideshow.tick());
    assert_eq!(
        slideshow.carousel().current(&images).map(String::as_str),
        Some("/images/wedding/first-ceremony/photo_000.jpg")
    );

    let reception = gallery.feed("reception").unwrap();
    let mut lightbox = Lightbox::new(reception.images().len());
    lightbox.open_at(0);
    lightbox.handle_key(ViewerKey::ArrowLeft);
    assert_eq!(lightbox.carousel().counter(), "31 / 31");
}
