//! Exhibit administration: CRUD, bulk status actions
//!
//! All updates, single or bulk, pass through [`update_exhibit`], which keeps
//! the exhibit row and its history log consistent.

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::update::handle as update_exhibit;
pub use commands::{
    BulkAction, BulkStatusCommand, BulkStatusError, BulkStatusResponse, CreateExhibitCommand,
    CreateExhibitError, DeleteExhibitError, DeleteExhibitResponse, UpdateExhibitCommand,
    UpdateExhibitError, UpdateExhibitResponse,
};
pub use queries::{GetExhibitError, ListExhibitsError, ListExhibitsQuery};
pub use routes::exhibits_routes;
