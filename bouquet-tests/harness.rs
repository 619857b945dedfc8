//! Shared server harness for integration and end-to-end tests.

use std::path::Path;

use bouquet_core::config::{BouquetConfig, LibraryConfig};
use bouquet_core::library::test_fixtures::{create_category_with_count, create_photo_root};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Album server running on a background task for the duration of a test.
pub struct TestServer {
    pub base_url: String,
    _root: tempfile::TempDir,
    task: JoinHandle<()>,
}

impl TestServer {
    /// Starts a server over a fresh photo root with `count` photos per category.
    pub async fn start(counts: &[(&str, usize)]) -> Self {
        let root = create_photo_root();
        for (category, count) in counts {
            create_category_with_count(root.path(), category, *count);
        }
        Self::start_at(root).await
    }

    /// Starts a server over an already prepared photo root.
    pub async fn start_at(root: tempfile::TempDir) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let config = config_for(root.path());

        let task = tokio::spawn(async move {
            if let Err(e) = bouquet_web::serve(listener, config).await {
                eprintln!("test server stopped: {e}");
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            _root: root,
            task,
        }
    }

    #[allow(dead_code)]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn config_for(root: &Path) -> BouquetConfig {
    BouquetConfig {
        library: LibraryConfig {
            photo_root: root.to_path_buf(),
            ..LibraryConfig::default()
        },
        ..BouquetConfig::default()
    }
}
