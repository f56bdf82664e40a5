//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Compile route table → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl-C → trigger broadcast → server drains and exits
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
