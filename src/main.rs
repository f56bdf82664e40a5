//! Campus Panel preview server.
//!
//! Serves the admin panel shell: every configured route path answers with
//! the shell page for its view, redirects answer with the canonical path,
//! and unknown paths render the not-found view.
//!
//! Pass a config file path as the first argument; with no argument the
//! production defaults apply.

use std::path::PathBuf;

use tokio::net::TcpListener;

use campus_panel::config::{load_config, PanelConfig};
use campus_panel::http::PanelServer;
use campus_panel::lifecycle::Shutdown;
use campus_panel::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&PathBuf::from(path))?,
        None => PanelConfig::default(),
    };

    init_logging(&config.observability);

    tracing::info!("campus-panel v0.1.0 starting");
    tracing::info!(
        bind_address = %config.server.bind_address,
        routes = config.routes.len(),
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    shutdown.trigger_on_ctrl_c();

    let server = PanelServer::new(config);
    server.run(listener, signal).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
