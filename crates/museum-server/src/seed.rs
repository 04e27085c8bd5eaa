//! Demo data for a fresh catalog
//!
//! Ensures the `admin` operator exists and registers synthetic exhibits
//! numbered `MK-<year>-NNNN`. Numbers already in the catalog are skipped, so
//! running the seeder twice is harmless.

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use sqlx::SqlitePool;

use crate::features::exhibits::commands::{create, CreateExhibitCommand, CreateExhibitError};
use crate::features::operators::commands::{create as create_operator, CreateOperatorCommand, CreateOperatorError};
use crate::features::operators::queries::get::by_username;
use crate::models::{ExhibitStatus, Operator};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_EMAIL: &str = "admin@museum.example";
pub const DEFAULT_SEED_COUNT: u32 = 20;

const CATEGORIES: &[&str] = &["Painting", "Sculpture", "Archaeology", "Numismatics", "Ethnography"];

const LOCATIONS: &[&str] = &["Hall 1", "Hall 2", "Hall 3", "Storage", "Restoration workshop"];

const STATUSES: &[ExhibitStatus] = &[
    ExhibitStatus::OnDisplay,
    ExhibitStatus::InStorage,
    ExhibitStatus::InRestoration,
    ExhibitStatus::OnLoan,
];

/// (name, author, material, dimensions)
const PIECES: &[(&str, &str, &str, &str)] = &[
    ("Portrait of the Empress", "I. I. Ivanov", "Oil on canvas", "80x60 cm"),
    ("Ancient vase", "Unknown", "Ceramics", "40x30 cm"),
    ("Coin from the reign of Peter I", "Mint", "Silver", "3x3 cm"),
    ("National costume", "Folk craftsmen", "Fabric, embroidery", "-"),
    ("Bust of Alexander I", "P. P. Petrov", "Marble", "50x40x30 cm"),
    ("Old Russian icon", "Monastery", "Wood, tempera", "30x40 cm"),
    ("Batashev factory samovar", "Batashev", "Brass", "Height 45 cm"),
    ("Viking sword", "Unknown", "Iron, bronze", "90 cm"),
    ("Porcelain tea service", "Imperial Porcelain Factory", "Porcelain", "For 12 persons"),
    ("Painting \"Sunset\"", "S. S. Sidorov", "Oil on canvas", "100x120 cm"),
];

const DESCRIPTIONS: &[&str] = &[
    "A unique piece of great historical value. Found during archaeological excavations.",
    "A fine example of the craftsmanship of its era, notable for the quality of its execution.",
    "A rare specimen, one of the few to have survived to the present day.",
    "Formerly part of a private collection, donated to the museum. Of scholarly interest.",
    "A remarkable example of the art of its period. In excellent condition.",
];

const CREATION_DATES: &[&str] = &[
    "XVIII century",
    "XIX century",
    "XX century",
    "1850s",
    "1920s",
    "1700",
    "1812",
];

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to prepare admin operator: {0}")]
    Operator(#[from] CreateOperatorError),

    #[error("Failed to create exhibit: {0}")]
    Exhibit(#[from] CreateExhibitError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub operator_created: bool,
    pub created: u32,
    pub skipped: u32,
}

fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Inventory number of the `n`th seeded exhibit (1-based)
pub fn inventory_number(year: i32, n: u32) -> String {
    format!("MK-{}-{:04}", year, n)
}

/// A random exhibit; `today` anchors the acquisition date
pub fn random_exhibit<R: Rng>(rng: &mut R, inventory_number: String, today: NaiveDate) -> CreateExhibitCommand {
    let (name, author, material, dimensions) = *pick(rng, PIECES);
    let days_ago = rng.gen_range(30..=3650);

    CreateExhibitCommand {
        inventory_number,
        name: name.to_string(),
        description: pick(rng, DESCRIPTIONS).to_string(),
        acquisition_date: today - Duration::days(days_ago),
        status: Some(*pick(rng, STATUSES)),
        current_location: pick(rng, LOCATIONS).to_string(),
        category: pick(rng, CATEGORIES).to_string(),
        author: author.to_string(),
        creation_date: pick(rng, CREATION_DATES).to_string(),
        material: material.to_string(),
        dimensions: dimensions.to_string(),
    }
}

/// Get or create the `admin` operator
pub async fn ensure_admin(pool: &SqlitePool) -> Result<(Operator, bool), SeedError> {
    if let Some(existing) = by_username(pool, ADMIN_USERNAME).await? {
        return Ok((existing, false));
    }

    let command = CreateOperatorCommand {
        username: ADMIN_USERNAME.to_string(),
        email: Some(ADMIN_EMAIL.to_string()),
        is_staff: true,
    };
    match create_operator::handle(pool.clone(), command).await {
        Ok(operator) => Ok((operator, true)),
        // Created concurrently by another seeder
        Err(CreateOperatorError::DuplicateUsername(_)) => by_username(pool, ADMIN_USERNAME)
            .await?
            .map(|operator| (operator, false))
            .ok_or(SeedError::Database(sqlx::Error::RowNotFound)),
        Err(e) => Err(e.into()),
    }
}

#[tracing::instrument(skip(pool, rng))]
pub async fn seed<R: Rng>(
    pool: &SqlitePool,
    count: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Result<SeedReport, SeedError> {
    let (admin, operator_created) = ensure_admin(pool).await?;
    tracing::info!(operator = %admin.username, created = operator_created, "Admin operator ready");

    let mut report = SeedReport {
        operator_created,
        created: 0,
        skipped: 0,
    };

    for n in 1..=count {
        let number = inventory_number(today.year(), n);

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM exhibits WHERE inventory_number = ?1)")
                .bind(&number)
                .fetch_one(pool)
                .await?;
        if exists {
            report.skipped += 1;
            continue;
        }

        let exhibit = create::handle(pool.clone(), random_exhibit(rng, number, today)).await?;
        tracing::info!(
            inventory_number = %exhibit.inventory_number,
            name = %exhibit.name,
            "Seeded exhibit"
        );
        report.created += 1;
    }

    Ok(report)
}
