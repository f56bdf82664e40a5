//! Campus administration panel tooling.

pub mod artifacts;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;

pub use config::PanelConfig;
pub use http::PanelServer;
pub use lifecycle::Shutdown;
pub use navigation::{Navigator, RouteTable};
