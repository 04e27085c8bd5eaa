use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::shared::pagination::{Paginated, PaginationParams};
use crate::models::{Exhibit, ExhibitStatus, EXHIBIT_COLUMNS};

/// Admin exhibit listing filters, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListExhibitsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExhibitStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Case-insensitive match on inventory number, name, description and author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListExhibitsError {
    #[error("{0}")]
    InvalidPagination(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ListExhibitsQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }

    pub fn validate(&self) -> Result<(), ListExhibitsError> {
        self.pagination()
            .validate()
            .map_err(ListExhibitsError::InvalidPagination)
    }
}

const FILTER: &str = r#"
    WHERE (?1 IS NULL OR status = ?1)
      AND (?2 IS NULL OR category = ?2)
      AND (?3 IS NULL
           OR LOWER(inventory_number) LIKE ?3
           OR LOWER(name) LIKE ?3
           OR LOWER(description) LIKE ?3
           OR LOWER(author) LIKE ?3)
"#;

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: ListExhibitsQuery,
) -> Result<Paginated<Exhibit>, ListExhibitsError> {
    query.validate()?;

    let params = query.pagination();
    let pattern = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(|q| format!("%{}%", q.to_lowercase()));

    let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM exhibits {}", FILTER))
        .bind(query.status)
        .bind(query.category.as_deref())
        .bind(pattern.as_deref())
        .fetch_one(&pool)
        .await?;

    let sql = format!(
        "SELECT {} FROM exhibits {} ORDER BY created_at DESC, id DESC LIMIT ?4 OFFSET ?5",
        EXHIBIT_COLUMNS, FILTER
    );
    let items = sqlx::query_as::<_, Exhibit>(&sql)
        .bind(query.status)
        .bind(query.category.as_deref())
        .bind(pattern.as_deref())
        .bind(params.per_page())
        .bind(params.offset())
        .fetch_all(&pool)
        .await?;

    Ok(Paginated::from_items(items, &params, total))
}
