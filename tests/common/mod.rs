//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use console_router::config::ConsoleConfig;
use console_router::lifecycle::Shutdown;
use console_router::navigation::{NavigationGroups, NavigationStore};
use console_router::ConsoleServer;

/// Store that remembers every publication.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingStore {
    pub calls: AtomicUsize,
    pub last: std::sync::Mutex<Option<Arc<NavigationGroups>>>,
}

#[allow(dead_code)]
impl RecordingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<Arc<NavigationGroups>> {
        self.last.lock().unwrap().clone()
    }
}

impl NavigationStore for RecordingStore {
    fn set_routes(&self, groups: Arc<NavigationGroups>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(groups);
    }
}

/// A running shell and the handle that stops it.
#[allow(dead_code)]
pub struct TestShell {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestShell {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestShell {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a shell on an ephemeral port.
#[allow(dead_code)]
pub async fn start_shell(mut config: ConsoleConfig) -> TestShell {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = ConsoleServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestShell { addr, shutdown }
}

/// Client that reports redirects instead of following them.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
