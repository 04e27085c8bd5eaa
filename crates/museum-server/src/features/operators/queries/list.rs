use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::shared::pagination::{Paginated, PaginationParams};
use crate::models::{Operator, OPERATOR_COLUMNS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOperatorsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListOperatorsError {
    #[error("{0}")]
    InvalidPagination(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: ListOperatorsQuery,
) -> Result<Paginated<Operator>, ListOperatorsError> {
    let params = PaginationParams::new(query.page, query.per_page);
    params.validate().map_err(ListOperatorsError::InvalidPagination)?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM operators")
        .fetch_one(&pool)
        .await?;

    let sql = format!(
        "SELECT {} FROM operators ORDER BY username LIMIT ?1 OFFSET ?2",
        OPERATOR_COLUMNS
    );
    let items = sqlx::query_as::<_, Operator>(&sql)
        .bind(params.per_page())
        .bind(params.offset())
        .fetch_all(&pool)
        .await?;

    Ok(Paginated::from_items(items, &params, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{insert_operator, test_pool};

    #[tokio::test]
    async fn test_list_sorted_by_username() {
        let pool = test_pool().await;
        insert_operator(&pool, "zoe").await;
        insert_operator(&pool, "adam").await;

        let page = handle(pool, ListOperatorsQuery::default()).await.unwrap();
        let names: Vec<_> = page.items.iter().map(|o| o.username.as_str()).collect();
        assert_eq!(names, vec!["adam", "zoe"]);
        assert_eq!(page.pagination.total, 2);
    }
}
