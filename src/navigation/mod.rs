//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteConfig[] (validated)
//!     → table.rs (compile entries, freeze as immutable RouteTable)
//!
//! Navigation:
//!     requested path
//!     → table.rs resolve (exact match, first match wins, follow redirects)
//!     → Resolution: View | NotFound
//!     → navigator.rs (push history entry, back/forward over a cursor)
//! ```
//!
//! # Design Decisions
//! - Table compiled at startup, immutable at runtime
//! - First match wins over the declared order
//! - Explicit not-found view rather than an undefined outcome
//! - History is an explicit structure, not a browser side effect

pub mod navigator;
pub mod table;

pub use navigator::{HistoryEntry, Navigator};
pub use table::{Resolution, RouteEntry, RouteTable, RouteTarget, ViewRef};
