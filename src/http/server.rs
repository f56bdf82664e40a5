//! Preview server for the panel shell.
//!
//! # Responsibilities
//! - Create the Axum router with the shell handler on every path
//! - Wire up middleware (timeout, request ID, tracing)
//! - Resolve request paths against the immutable route table
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - Redirect entries answer with an HTTP redirect so the browser records
//!   the canonical path in its history
//! - Unmatched paths get a real 404 page rendering the not-found view
//! - The route table is compiled once at construction and shared via Arc

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::PanelConfig;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::navigation::{Resolution, RouteTable, ViewRef};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
}

/// HTTP server exposing the panel shell at every route path.
pub struct PanelServer {
    router: Router,
    config: PanelConfig,
}

impl PanelServer {
    /// Create a new preview server with the given configuration.
    pub fn new(config: PanelConfig) -> Self {
        let table = Arc::new(RouteTable::from_config(&config.routes, &config.navigation));
        let state = AppState { table };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &PanelConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(shell_handler))
            .route("/", any(shell_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "Preview server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Preview server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }
}

/// Shell handler: resolves the request path and answers with the view
/// shell, a redirect, or the not-found page.
async fn shell_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let path = request.uri().path().to_string();

    match state.table.resolve(&path) {
        Resolution::View {
            view,
            canonical,
            redirected,
        } => {
            if redirected {
                tracing::debug!(
                    request_id = %request_id,
                    from = %path,
                    to = %canonical,
                    "Redirecting to canonical path"
                );
                return Redirect::temporary(&canonical).into_response();
            }

            tracing::debug!(
                request_id = %request_id,
                path = %path,
                view = %view.name,
                "Mounting view"
            );
            Html(render_shell(&view, &canonical)).into_response()
        }
        Resolution::NotFound { view, path } => {
            tracing::warn!(request_id = %request_id, path = %path, "No route matched");
            (StatusCode::NOT_FOUND, Html(render_shell(&view, &path))).into_response()
        }
    }
}

/// Render the minimal HTML shell that mounts a view.
fn render_shell(view: &ViewRef, path: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title} · Campus Panel</title></head>\n\
         <body data-view=\"{name}\" data-path=\"{path}\">\n\
         <div id=\"app\"><h1>{title}</h1></div>\n\
         </body>\n\
         </html>\n",
        title = escape(&view.title),
        name = escape(&view.name),
        path = escape(path),
    )
}

/// Minimal HTML attribute/text escaping.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_names_view_and_path() {
        let view = ViewRef::with_title("Students", "Students");
        let html = render_shell(&view, "/students");
        assert!(html.contains("data-view=\"Students\""));
        assert!(html.contains("data-path=\"/students\""));
        assert!(html.contains("<title>Students · Campus Panel</title>"));
    }

    #[test]
    fn test_shell_escapes_markup() {
        let view = ViewRef::with_title("<script>", "a & b");
        let html = render_shell(&view, "/x\"y");
        assert!(html.contains("data-view=\"&lt;script&gt;\""));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("data-path=\"/x&quot;y\""));
        assert!(!html.contains("<script>"));
    }
}
