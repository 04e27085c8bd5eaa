//! Database error handling utilities
//!
//! # Examples
//!
//! ```rust,ignore
//! use museum_server::features::shared::error_helpers::is_unique_violation;
//!
//! let result = sqlx::query("INSERT ...").execute(&pool).await;
//! if let Err(ref e) = result {
//!     if is_unique_violation(e) { /* map to a conflict */ }
//! }
//! ```

use sqlx::Error as SqlxError;

/// Check if the error is a unique constraint violation
pub fn is_unique_violation(error: &SqlxError) -> bool {
    if let SqlxError::Database(db_err) = error {
        return db_err.is_unique_violation();
    }
    false
}

/// Check if the error is a foreign key violation
pub fn is_foreign_key_violation(error: &SqlxError) -> bool {
    if let SqlxError::Database(db_err) = error {
        return db_err.is_foreign_key_violation();
    }
    false
}

/// Map a unique violation to `unique_error`, wrapping anything else
pub fn map_unique_violation<E, F>(error: SqlxError, unique_error: E, default_wrapper: F) -> E
where
    F: FnOnce(SqlxError) -> E,
{
    if is_unique_violation(&error) {
        unique_error
    } else {
        default_wrapper(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::test_pool;

    #[tokio::test]
    async fn test_detects_unique_and_foreign_key_violations() {
        let pool = test_pool().await;

        sqlx::query(
            "INSERT INTO operators (id, username, is_staff, created_at) \
             VALUES (?1, 'dup', 1, '2026-01-01T00:00:00+00:00')",
        )
        .bind(uuid::Uuid::new_v4())
        .execute(&pool)
        .await
        .unwrap();

        let dup = sqlx::query(
            "INSERT INTO operators (id, username, is_staff, created_at) \
             VALUES (?1, 'dup', 1, '2026-01-01T00:00:00+00:00')",
        )
        .bind(uuid::Uuid::new_v4())
        .execute(&pool)
        .await
        .unwrap_err();
        assert!(is_unique_violation(&dup));
        assert!(!is_foreign_key_violation(&dup));

        let orphan = sqlx::query(
            "INSERT INTO photos (exhibit_id, image, caption, is_main, uploaded_at) \
             VALUES (424242, 'a.jpg', '', 0, '2026-01-01T00:00:00+00:00')",
        )
        .execute(&pool)
        .await
        .unwrap_err();
        assert!(is_foreign_key_violation(&orphan));

        let mapped = map_unique_violation(dup, "conflict", |_| "other");
        assert_eq!(mapped, "conflict");
    }

    #[test]
    fn test_non_database_errors_are_not_violations() {
        assert!(!is_unique_violation(&SqlxError::RowNotFound));
        assert!(!is_foreign_key_violation(&SqlxError::RowNotFound));
    }
}
