//! Exhibit photos
//!
//! Any number of photos may carry the main flag. Display order puts flagged
//! photos first, then the most recent; the catalog's main photo is the first
//! photo in that order.

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreatePhotoCommand, CreatePhotoError, DeletePhotoError, DeletePhotoResponse,
    UpdatePhotoCommand, UpdatePhotoError,
};
pub use queries::{for_exhibit, main_photo, GetPhotoError, ListPhotosError, ListPhotosQuery};
pub use routes::photos_routes;
