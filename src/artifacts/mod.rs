//! Build artifact relocation subsystem.
//!
//! # Data Flow
//! ```text
//! BuildConfig (validated)
//!     → layout.rs plan (pure: shared root, per-subproject dirs,
//!       evaluation order, repository sources)
//!     → OutputLayout
//!     → clean.rs (delete shared root tree; missing root is a no-op)
//! ```
//!
//! # Design Decisions
//! - Planning never touches the filesystem; only clean does
//! - Independent of any build engine's task API; the CLI is the invoker
//! - Deletion failures are reported, never fatal inside the library

pub mod clean;
pub mod layout;

pub use clean::{clean, CleanError, CleanOutcome};
pub use layout::{LayoutError, OutputLayout, SubprojectOutput};
