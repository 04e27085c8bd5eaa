//! Delete operator command
//!
//! History entries the operator performed survive the deletion with their
//! performer cleared (`ON DELETE SET NULL`).

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteOperatorResponse {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteOperatorError {
    #[error("Operator {0} not found")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: Uuid) -> Result<DeleteOperatorResponse, DeleteOperatorError> {
    let username: String = sqlx::query_scalar("DELETE FROM operators WHERE id = ?1 RETURNING username")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(DeleteOperatorError::NotFound(id))?;

    tracing::info!(%username, "Operator deleted");

    Ok(DeleteOperatorResponse { id, username })
}
