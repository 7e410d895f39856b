//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tempfile::TempDir;
use tokio::net::TcpListener;
use upload_service::config::ServerConfig;
use upload_service::http::HttpServer;
use upload_service::lifecycle::Shutdown;
use upload_service::upload::UploadStore;

/// A running service instance backed by a temporary upload directory.
pub struct TestServer {
    pub addr: SocketAddr,
    upload_dir: TempDir,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Names of the files currently stored in the upload directory.
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.upload_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service on an ephemeral port with the default configuration.
pub async fn start_server() -> TestServer {
    let upload_dir = tempfile::tempdir().unwrap();

    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.storage.upload_dir = upload_dir.path().display().to_string();

    let store = UploadStore::new(upload_dir.path());
    store.ensure_dir().await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config, store).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestServer {
        addr,
        upload_dir,
        shutdown,
    }
}
