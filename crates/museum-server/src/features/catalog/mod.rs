//! Public, read-only catalog

pub mod queries;
pub mod routes;

pub use queries::{
    CatalogError, CatalogItem, CatalogPage, CatalogParams, ExhibitDetail, CATALOG_PAGE_SIZE,
};
pub use routes::catalog_routes;
