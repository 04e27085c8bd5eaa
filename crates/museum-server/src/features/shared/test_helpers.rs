//! Fixtures for database-backed unit tests
//!
//! Each test gets its own in-memory database with migrations applied. The
//! pool holds exactly one connection, which keeps the database alive for the
//! pool's lifetime.

use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::db::{connect_options, run_migrations};
use crate::features::exhibits::commands::CreateExhibitCommand;
use crate::features::operators::commands::CreateOperatorCommand;
use crate::features::photos::commands::CreatePhotoCommand;
use crate::models::{Exhibit, ExhibitStatus, Operator, Photo};

pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect_options("sqlite::memory:").expect("in-memory options"))
        .await
        .expect("in-memory pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}

pub fn exhibit_command(inventory_number: &str, status: ExhibitStatus) -> CreateExhibitCommand {
    CreateExhibitCommand {
        inventory_number: inventory_number.to_string(),
        name: format!("Exhibit {}", inventory_number),
        description: "Test exhibit".to_string(),
        acquisition_date: NaiveDate::from_ymd_opt(2020, 5, 17).expect("valid date"),
        status: Some(status),
        current_location: "Hall 1".to_string(),
        category: String::new(),
        author: String::new(),
        creation_date: String::new(),
        material: String::new(),
        dimensions: String::new(),
    }
}

pub async fn insert_exhibit(
    pool: &SqlitePool,
    inventory_number: &str,
    status: ExhibitStatus,
) -> Exhibit {
    crate::features::exhibits::commands::create::handle(
        pool.clone(),
        exhibit_command(inventory_number, status),
    )
    .await
    .expect("create exhibit")
}

pub async fn insert_operator(pool: &SqlitePool, username: &str) -> Operator {
    crate::features::operators::commands::create::handle(
        pool.clone(),
        CreateOperatorCommand {
            username: username.to_string(),
            email: None,
            is_staff: true,
        },
    )
    .await
    .expect("create operator")
}

pub async fn insert_photo(pool: &SqlitePool, exhibit_id: i64, image: &str, is_main: bool) -> Photo {
    crate::features::photos::commands::create::handle(
        pool.clone(),
        CreatePhotoCommand {
            exhibit_id,
            image: image.to_string(),
            caption: String::new(),
            is_main,
        },
    )
    .await
    .expect("create photo")
}
