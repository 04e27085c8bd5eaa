use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Operator, OPERATOR_COLUMNS};

#[derive(Debug, thiserror::Error)]
pub enum GetOperatorError {
    #[error("Operator {0} not found")]
    NotFound(Uuid),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: Uuid) -> Result<Operator, GetOperatorError> {
    let sql = format!("SELECT {} FROM operators WHERE id = ?1", OPERATOR_COLUMNS);

    sqlx::query_as::<_, Operator>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(GetOperatorError::NotFound(id))
}

pub async fn by_username(pool: &SqlitePool, username: &str) -> Result<Option<Operator>, sqlx::Error> {
    let sql = format!("SELECT {} FROM operators WHERE username = ?1", OPERATOR_COLUMNS);

    sqlx::query_as::<_, Operator>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{insert_operator, test_pool};

    #[tokio::test]
    async fn test_lookup_by_id_and_username() {
        let pool = test_pool().await;
        let created = insert_operator(&pool, "keeper").await;

        assert_eq!(handle(pool.clone(), created.id).await.unwrap(), created);
        assert_eq!(
            by_username(&pool, "keeper").await.unwrap().map(|o| o.id),
            Some(created.id)
        );
        assert!(by_username(&pool, "nobody").await.unwrap().is_none());
        assert!(matches!(
            handle(pool, Uuid::new_v4()).await,
            Err(GetOperatorError::NotFound(_))
        ));
    }
}
