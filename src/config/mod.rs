//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PanelConfig (validated, immutable)
//!     → compiled into RouteTable / OutputLayout at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table it produces never
//!   changes at runtime
//! - All fields have defaults so the zero-config case is the production panel
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::PanelConfig;
pub use schema::{BuildConfig, NavigationConfig, ObservabilityConfig, RouteConfig, ServerConfig};
