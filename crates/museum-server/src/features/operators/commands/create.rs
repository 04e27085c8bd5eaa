//! Create operator command

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::features::shared::error_helpers::map_unique_violation;
use crate::features::shared::validation::{validate_required, FieldValidationError, USERNAME_MAX};
use crate::models::{Operator, OPERATOR_COLUMNS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOperatorCommand {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default = "default_is_staff")]
    pub is_staff: bool,
}

fn default_is_staff() -> bool {
    true
}

#[derive(Debug, thiserror::Error)]
pub enum CreateOperatorError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error("Operator '{0}' already exists")]
    DuplicateUsername(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CreateOperatorCommand {
    pub fn validate(&self) -> Result<(), CreateOperatorError> {
        validate_required("username", &self.username, USERNAME_MAX)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(username = %command.username))]
pub async fn handle(
    pool: SqlitePool,
    command: CreateOperatorCommand,
) -> Result<Operator, CreateOperatorError> {
    command.validate()?;

    let username = command.username.trim().to_string();
    let email = command
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty());

    let sql = format!(
        r#"
        INSERT INTO operators (id, username, email, is_staff, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING {}
        "#,
        OPERATOR_COLUMNS
    );

    let operator = sqlx::query_as::<_, Operator>(&sql)
        .bind(Uuid::new_v4())
        .bind(&username)
        .bind(email)
        .bind(command.is_staff)
        .bind(Utc::now())
        .fetch_one(&pool)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                CreateOperatorError::DuplicateUsername(username.clone()),
                CreateOperatorError::Database,
            )
        })?;

    tracing::info!(operator_id = %operator.id, "Operator created");

    Ok(operator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::test_pool;

    #[tokio::test]
    async fn test_create_and_reject_duplicate() {
        let pool = test_pool().await;
        let command = CreateOperatorCommand {
            username: " registrar ".to_string(),
            email: Some("registrar@museum.example".to_string()),
            is_staff: true,
        };

        let operator = handle(pool.clone(), command.clone()).await.unwrap();
        assert_eq!(operator.username, "registrar");
        assert_eq!(operator.email.as_deref(), Some("registrar@museum.example"));

        let err = handle(pool, command).await.unwrap_err();
        assert!(matches!(err, CreateOperatorError::DuplicateUsername(ref u) if u == "registrar"));
    }

    #[test]
    fn test_is_staff_defaults_to_true() {
        let command: CreateOperatorCommand = serde_json::from_str(r#"{"username":"x"}"#).unwrap();
        assert!(command.is_staff);
        assert!(command.email.is_none());
    }
}
