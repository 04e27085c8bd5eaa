//! Delete exhibit command
//!
//! Photos and history entries of the exhibit are removed with it by the
//! `ON DELETE CASCADE` foreign keys.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteExhibitResponse {
    pub id: i64,
    pub inventory_number: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteExhibitError {
    #[error("Exhibit {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: i64) -> Result<DeleteExhibitResponse, DeleteExhibitError> {
    let inventory_number: Option<String> =
        sqlx::query_scalar("DELETE FROM exhibits WHERE id = ?1 RETURNING inventory_number")
            .bind(id)
            .fetch_optional(&pool)
            .await?;

    let inventory_number = inventory_number.ok_or(DeleteExhibitError::NotFound(id))?;

    tracing::info!(%inventory_number, "Exhibit deleted");

    Ok(DeleteExhibitResponse {
        id,
        inventory_number,
    })
}
