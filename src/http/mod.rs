//! HTTP surface subsystem.
//!
//! # Data Flow
//! ```text
//! Browser request
//!     → server.rs (Axum setup, timeout / request-id / trace layers)
//!     → navigation layer resolves the path
//!     → view: 200 shell page
//!       redirect: 3xx to the canonical path
//!       no match: 404 not-found page
//! ```

pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::PanelServer;
