//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use campus_panel::config::PanelConfig;
use campus_panel::http::PanelServer;
use campus_panel::lifecycle::Shutdown;

/// A preview server running on an ephemeral port.
///
/// Holds the shutdown coordinator so the server stays alive for the test's
/// duration; dropping the handle closes the broadcast channel and the server
/// drains on its own.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Start a preview server with the given config.
pub async fn start_panel_server(config: PanelConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();

    let server = PanelServer::new(config);
    tokio::spawn(async move {
        server.run(listener, signal).await.unwrap();
    });

    TestServer { addr, shutdown }
}
