use sqlx::SqlitePool;

use crate::models::{Exhibit, EXHIBIT_COLUMNS};

#[derive(Debug, thiserror::Error)]
pub enum GetExhibitError {
    #[error("Exhibit {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: i64) -> Result<Exhibit, GetExhibitError> {
    let sql = format!("SELECT {} FROM exhibits WHERE id = ?1", EXHIBIT_COLUMNS);

    sqlx::query_as::<_, Exhibit>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(GetExhibitError::NotFound(id))
}
