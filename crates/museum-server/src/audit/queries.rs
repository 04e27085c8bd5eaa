//! Database queries for the exhibit history log
//!
//! The log is append-only: there is an insert and there are reads, nothing
//! else. Reads are ordered most recent first, with insertion order breaking
//! timestamp ties.

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use super::models::{ChangeEvent, LogEntry, LogEntryView, LogQuery};
use crate::features::shared::pagination::Paginated;

const LOG_ENTRY_COLUMNS: &str = "id, exhibit_id, action, from_status, to_status, \
     from_location, to_location, timestamp, notes, performed_by";

const LOG_VIEW_SELECT: &str = r#"
    SELECT l.id, l.exhibit_id, e.inventory_number, e.name AS exhibit_name,
           l.action, l.from_status, l.to_status, l.from_location, l.to_location,
           l.timestamp, l.notes, l.performed_by, o.username AS performed_by_username
    FROM exhibit_logs l
    JOIN exhibits e ON e.id = l.exhibit_id
    LEFT JOIN operators o ON o.id = l.performed_by
"#;

const LOG_FILTER: &str = r#"
    WHERE (?1 IS NULL OR l.exhibit_id = ?1)
      AND (?2 IS NULL OR l.action = ?2)
      AND (?3 IS NULL
           OR LOWER(l.notes) LIKE ?3
           OR LOWER(e.inventory_number) LIKE ?3
           OR LOWER(e.name) LIKE ?3)
"#;

/// Append a classified change to an exhibit's history
///
/// Runs on the caller's connection so the entry commits or rolls back
/// together with the exhibit update that produced it.
pub async fn append_log_entry(
    conn: &mut SqliteConnection,
    exhibit_id: i64,
    event: &ChangeEvent,
    performed_by: Option<Uuid>,
) -> Result<LogEntry, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO exhibit_logs (
            exhibit_id, action, from_status, to_status,
            from_location, to_location, timestamp, notes, performed_by
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        RETURNING {}
        "#,
        LOG_ENTRY_COLUMNS
    );

    let entry = sqlx::query_as::<_, LogEntry>(&sql)
        .bind(exhibit_id)
        .bind(event.action)
        .bind(event.from_status)
        .bind(event.to_status)
        .bind(&event.from_location)
        .bind(&event.to_location)
        .bind(Utc::now())
        .bind(&event.notes)
        .bind(performed_by)
        .fetch_one(&mut *conn)
        .await?;

    debug!(
        log_id = entry.id,
        exhibit_id,
        action = %entry.action,
        "Appended exhibit history entry"
    );

    Ok(entry)
}

/// The `limit` most recent entries for one exhibit, with performer names
pub async fn recent_for_exhibit(
    pool: &SqlitePool,
    exhibit_id: i64,
    limit: i64,
) -> Result<Vec<LogEntryView>, sqlx::Error> {
    let sql = format!(
        "{} WHERE l.exhibit_id = ?1 ORDER BY l.timestamp DESC, l.id DESC LIMIT ?2",
        LOG_VIEW_SELECT
    );

    sqlx::query_as::<_, LogEntryView>(&sql)
        .bind(exhibit_id)
        .bind(limit)
        .fetch_all(pool)
        .await
}

/// Filtered, paginated history listing across all exhibits
pub async fn list_log_entries(
    pool: &SqlitePool,
    query: &LogQuery,
) -> Result<Paginated<LogEntryView>, sqlx::Error> {
    let params = query.pagination();
    let pattern = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(|q| format!("%{}%", q.to_lowercase()));

    let count_sql = format!(
        r#"
        SELECT COUNT(*)
        FROM exhibit_logs l
        JOIN exhibits e ON e.id = l.exhibit_id
        {}
        "#,
        LOG_FILTER
    );
    let total: i64 = sqlx::query_scalar(&count_sql)
        .bind(query.exhibit_id)
        .bind(query.action)
        .bind(pattern.as_deref())
        .fetch_one(pool)
        .await?;

    let list_sql = format!(
        "{} {} ORDER BY l.timestamp DESC, l.id DESC LIMIT ?4 OFFSET ?5",
        LOG_VIEW_SELECT, LOG_FILTER
    );
    let items = sqlx::query_as::<_, LogEntryView>(&list_sql)
        .bind(query.exhibit_id)
        .bind(query.action)
        .bind(pattern.as_deref())
        .bind(params.per_page())
        .bind(params.offset())
        .fetch_all(pool)
        .await?;

    Ok(Paginated::from_items(items, &params, total))
}

/// A single history entry with its exhibit and performer
pub async fn get_log_entry(pool: &SqlitePool, id: i64) -> Result<Option<LogEntryView>, sqlx::Error> {
    let sql = format!("{} WHERE l.id = ?1", LOG_VIEW_SELECT);

    sqlx::query_as::<_, LogEntryView>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}
