//! Cloud Usage Reporter
//!
//! Reports cloud-storage consumption for array volumes that are protected
//! by snapmirror backup relationships or offloaded via capacity tiering.
//! Array-side identifiers are resolved into a cloud container plus object
//! prefix, and object sizes under that prefix are summed into a
//! human-readable byte count.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────────────────────────────────┐
//! │ Report Assembler │────▶│ Backup Resolver  /  Tiering Resolver    │
//! └────────┬─────────┘     └───────────────────┬─────────────────────┘
//!          │                                   │
//!          │                         ┌─────────┴──────────┐
//!          │                         │ Array Metadata API │
//!          │                         └────────────────────┘
//!          ▼
//! ┌──────────────────────────┐     ┌────────────────────────┐
//! │ Object Store Size Reader │────▶│ Size Formatting        │
//! └──────────────────────────┘     └────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: typed, authenticated reads against the array management API
//! - [`objectstore`]: cursor-paged object listing and size summation
//! - [`resolve`]: backup and tiering resolvers
//! - [`report`]: service dispatch and final record assembly
//! - [`sizefmt`]: unit-scaled byte formatting
//! - [`config`], [`export`], [`progress`]: environment, presentation, and
//!   user-feedback glue around the pipeline
//! - [`error`]: error taxonomy

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod objectstore;
pub mod progress;
pub mod report;
pub mod resolve;
pub mod sizefmt;

// Re-export commonly used types
pub use api::{ArrayClient, ArrayClientConfig, ArrayMetadata};
pub use error::{Error, Result};
pub use objectstore::{compute_size, GcsLister, GcsListerConfig, ObjectLister};
pub use report::{build_report, ServiceKind, SizedEntry};
pub use resolve::ResolvedEntry;
pub use sizefmt::format_bytes;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
