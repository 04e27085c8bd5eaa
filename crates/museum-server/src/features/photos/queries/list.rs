use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::shared::pagination::{Paginated, PaginationParams};
use crate::models::{Photo, PHOTO_COLUMNS, PHOTO_DISPLAY_ORDER};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPhotosQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhibit_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_main: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListPhotosError {
    #[error("{0}")]
    InvalidPagination(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ListPhotosQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }
}

const FILTER: &str = "WHERE (?1 IS NULL OR exhibit_id = ?1) AND (?2 IS NULL OR is_main = ?2)";

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: ListPhotosQuery,
) -> Result<Paginated<Photo>, ListPhotosError> {
    let params = query.pagination();
    params.validate().map_err(ListPhotosError::InvalidPagination)?;

    let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM photos {}", FILTER))
        .bind(query.exhibit_id)
        .bind(query.is_main)
        .fetch_one(&pool)
        .await?;

    let sql = format!(
        "SELECT {} FROM photos {} ORDER BY exhibit_id, {} LIMIT ?3 OFFSET ?4",
        PHOTO_COLUMNS, FILTER, PHOTO_DISPLAY_ORDER
    );
    let items = sqlx::query_as::<_, Photo>(&sql)
        .bind(query.exhibit_id)
        .bind(query.is_main)
        .bind(params.per_page())
        .bind(params.offset())
        .fetch_all(&pool)
        .await?;

    Ok(Paginated::from_items(items, &params, total))
}

/// Every photo of one exhibit, in display order
pub async fn for_exhibit(pool: &SqlitePool, exhibit_id: i64) -> Result<Vec<Photo>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM photos WHERE exhibit_id = ?1 ORDER BY {}",
        PHOTO_COLUMNS, PHOTO_DISPLAY_ORDER
    );

    sqlx::query_as::<_, Photo>(&sql)
        .bind(exhibit_id)
        .fetch_all(pool)
        .await
}

/// The photo the catalog shows for an exhibit
///
/// Expects `photos` in display order, so this is the most recent flagged
/// photo, or the most recent photo when none is flagged.
pub fn main_photo(photos: &[Photo]) -> Option<&Photo> {
    photos.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{insert_exhibit, insert_photo, test_pool};
    use crate::models::ExhibitStatus;

    #[tokio::test]
    async fn test_flagged_photo_sorts_first() {
        let pool = test_pool().await;
        let exhibit = insert_exhibit(&pool, "PL-1", ExhibitStatus::OnDisplay).await;
        insert_photo(&pool, exhibit.id, "first.jpg", false).await;
        let flagged = insert_photo(&pool, exhibit.id, "main.jpg", true).await;
        insert_photo(&pool, exhibit.id, "last.jpg", false).await;

        let photos = for_exhibit(&pool, exhibit.id).await.unwrap();
        assert_eq!(photos.len(), 3);
        assert_eq!(photos[0].id, flagged.id);
        assert_eq!(main_photo(&photos).map(|p| p.id), Some(flagged.id));
    }

    #[tokio::test]
    async fn test_unflagged_falls_back_to_most_recent() {
        let pool = test_pool().await;
        let exhibit = insert_exhibit(&pool, "PL-2", ExhibitStatus::OnDisplay).await;
        insert_photo(&pool, exhibit.id, "a.jpg", false).await;
        let newest = insert_photo(&pool, exhibit.id, "b.jpg", false).await;

        let photos = for_exhibit(&pool, exhibit.id).await.unwrap();
        assert_eq!(main_photo(&photos).map(|p| p.id), Some(newest.id));
        assert!(main_photo(&[]).is_none());
    }

    #[tokio::test]
    async fn test_list_filters() {
        let pool = test_pool().await;
        let a = insert_exhibit(&pool, "PL-3", ExhibitStatus::OnDisplay).await;
        let b = insert_exhibit(&pool, "PL-4", ExhibitStatus::OnDisplay).await;
        insert_photo(&pool, a.id, "a1.jpg", true).await;
        insert_photo(&pool, a.id, "a2.jpg", false).await;
        insert_photo(&pool, b.id, "b1.jpg", true).await;

        let for_a = handle(
            pool.clone(),
            ListPhotosQuery {
                exhibit_id: Some(a.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(for_a.pagination.total, 2);

        let flagged = handle(
            pool,
            ListPhotosQuery {
                is_main: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(flagged.items.len(), 2);
        assert!(flagged.items.iter().all(|p| p.is_main));
    }
}
