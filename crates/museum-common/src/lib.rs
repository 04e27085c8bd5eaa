//! Museum Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared plumbing for the museum catalog workspace members:
//!
//! - **Error Handling**: [`MuseumError`] and the [`Result`] alias
//! - **Logging**: environment-driven `tracing` subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use museum_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> museum_common::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     let _guard = init_logging(&config)?;
//!     tracing::info!("catalog starting");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

pub use error::{MuseumError, Result};
