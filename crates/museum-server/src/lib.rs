//! Museum Server Library
//!
//! HTTP server for a museum collection catalog.
//!
//! # Overview
//!
//! - **Public catalog**: exhibits on display, exhibit pages with photos and
//!   recent history
//! - **Administration**: CRUD over exhibits, photos and operators, bulk
//!   status actions, read-only history listing
//! - **Database Management**: SQLite with SQLx and embedded migrations
//! - **Configuration**: Environment-based configuration management
//!
//! # Architecture
//!
//! Features follow a CQRS layout: commands change state, queries read it.
//!
//! ## Exhibit History
//!
//! Every save of an exhibit goes through
//! [`features::exhibits::update_exhibit`]. In one transaction it reads the
//! stored state, applies the changes, asks [`audit::classify`] whether the
//! status or location moved, writes the exhibit and appends at most one
//! history entry. Creation and metadata-only edits are never logged.
//!
//! ## Framework Stack
//!
//! - **Axum**: HTTP routing and extractors
//! - **SQLx**: SQLite access and migrations
//! - **Tower**: Middleware and service abstractions
//!
//! # Example
//!
//! ```no_run
//! use museum_server::{api, config::Config, db};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     db::run_migrations(&pool).await?;
//!     api::serve(pool, &config, async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod audit;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;
pub mod seed;

// Re-export commonly used types
pub use error::{AppError, AppResult};
