pub mod get;
pub mod list;

pub use get::GetPhotoError;
pub use list::{for_exhibit, main_photo, ListPhotosError, ListPhotosQuery};
