//! Public catalog projections
//!
//! Visitors only ever see exhibits that are on display in the listing; the
//! detail view is reachable for any exhibit id.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::audit::{self, LogEntryView, RECENT_HISTORY_LIMIT};
use crate::features::photos::{for_exhibit, main_photo};
use crate::features::shared::pagination::{resolve_page, PaginationMetadata};
use crate::models::{Exhibit, ExhibitStatus, Photo, EXHIBIT_COLUMNS, PHOTO_COLUMNS, PHOTO_DISPLAY_ORDER};

/// Fixed number of exhibits per catalog page
pub const CATALOG_PAGE_SIZE: i64 = 12;

/// Raw query string of the listing; `page` stays a string so that garbage
/// can fall back to the first page instead of failing extraction
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogParams {
    pub page: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogItem {
    #[serde(flatten)]
    pub exhibit: Exhibit,
    pub main_photo: Option<Photo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub pagination: PaginationMetadata,
    /// All exhibits in the collection, whatever their status
    pub total_exhibits: i64,
    pub on_display: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExhibitDetail {
    pub exhibit: Exhibit,
    pub photos: Vec<Photo>,
    pub main_photo: Option<Photo>,
    /// Most recent history entries, newest first
    pub history: Vec<LogEntryView>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Exhibit {0} not found")]
    ExhibitNotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn list_page(pool: SqlitePool, params: CatalogParams) -> Result<CatalogPage, CatalogError> {
    let total_exhibits: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exhibits")
        .fetch_one(&pool)
        .await?;
    let on_display: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exhibits WHERE status = ?1")
        .bind(ExhibitStatus::OnDisplay)
        .fetch_one(&pool)
        .await?;

    let pagination = resolve_page(params.page.as_deref(), on_display, CATALOG_PAGE_SIZE);

    let sql = format!(
        "SELECT {} FROM exhibits WHERE status = ?1 \
         ORDER BY created_at DESC, id DESC LIMIT ?2 OFFSET ?3",
        EXHIBIT_COLUMNS
    );
    let exhibits = sqlx::query_as::<_, Exhibit>(&sql)
        .bind(ExhibitStatus::OnDisplay)
        .bind(CATALOG_PAGE_SIZE)
        .bind((pagination.page - 1) * CATALOG_PAGE_SIZE)
        .fetch_all(&pool)
        .await?;

    let photo_sql = format!(
        "SELECT {} FROM photos WHERE exhibit_id = ?1 ORDER BY {} LIMIT 1",
        PHOTO_COLUMNS, PHOTO_DISPLAY_ORDER
    );
    let mut items = Vec::with_capacity(exhibits.len());
    for exhibit in exhibits {
        let main_photo = sqlx::query_as::<_, Photo>(&photo_sql)
            .bind(exhibit.id)
            .fetch_optional(&pool)
            .await?;
        items.push(CatalogItem { exhibit, main_photo });
    }

    tracing::debug!(
        page = pagination.page,
        pages = pagination.pages,
        shown = items.len(),
        "Catalog page resolved"
    );

    Ok(CatalogPage {
        items,
        pagination,
        total_exhibits,
        on_display,
    })
}

#[tracing::instrument(skip(pool))]
pub async fn exhibit_detail(pool: SqlitePool, id: i64) -> Result<ExhibitDetail, CatalogError> {
    let sql = format!("SELECT {} FROM exhibits WHERE id = ?1", EXHIBIT_COLUMNS);
    let exhibit = sqlx::query_as::<_, Exhibit>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(CatalogError::ExhibitNotFound(id))?;

    let photos = for_exhibit(&pool, id).await?;
    let main_photo = main_photo(&photos).cloned();
    let history = audit::recent_for_exhibit(&pool, id, RECENT_HISTORY_LIMIT).await?;

    Ok(ExhibitDetail {
        exhibit,
        photos,
        main_photo,
        history,
    })
}
