pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreatePhotoCommand, CreatePhotoError};
pub use delete::{DeletePhotoError, DeletePhotoResponse};
pub use update::{UpdatePhotoCommand, UpdatePhotoError};
