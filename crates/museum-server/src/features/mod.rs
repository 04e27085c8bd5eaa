//! Feature modules implementing the catalog API
//!
//! Each feature is a vertical slice with its own commands, queries and
//! routes, in the CQRS style: commands change state, queries only read it.
//!
//! # Features
//!
//! - **catalog**: public listing of exhibits on display and exhibit detail pages
//! - **exhibits**: exhibit CRUD and bulk status actions
//! - **photos**: exhibit photos and the main photo flag
//! - **history**: read-only access to the exhibit history log
//! - **operators**: staff accounts recorded as change performers
//!
//! # Architecture
//!
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list)
//! - `routes.rs` - HTTP route definitions
//!
//! Handlers are plain async functions taking the pool, so they are called the
//! same way from routes, the seeder and tests.

pub mod catalog;
pub mod exhibits;
pub mod history;
pub mod operators;
pub mod photos;
pub mod shared;

use axum::Router;
use sqlx::SqlitePool;

/// Public catalog routes, mounted at `/catalog`
pub fn public_router(pool: SqlitePool) -> Router<()> {
    catalog::catalog_routes().with_state(pool)
}

/// Administrative routes, mounted at `/api/v1/admin`
///
/// - `/exhibits` - Exhibit CRUD and bulk actions
/// - `/photos` - Photo CRUD
/// - `/history` - History log listing
/// - `/operators` - Operator accounts
pub fn admin_router(pool: SqlitePool) -> Router<()> {
    Router::new()
        .nest("/exhibits", exhibits::exhibits_routes().with_state(pool.clone()))
        .nest("/photos", photos::photos_routes().with_state(pool.clone()))
        .nest("/history", history::history_routes().with_state(pool.clone()))
        .nest("/operators", operators::operators_routes().with_state(pool))
}
