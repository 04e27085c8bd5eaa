//! Museum seeder - fills a catalog database with demo exhibits

use anyhow::Result;
use clap::Parser;
use museum_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use museum_server::{config::Config, db, seed};

#[derive(Debug, Parser)]
#[command(name = "museum-seed", version, about = "Populate the catalog with demo exhibits")]
struct Cli {
    /// Number of exhibits to create
    #[arg(long, short = 'n', default_value_t = seed::DEFAULT_SEED_COUNT)]
    count: u32,

    /// Fixed RNG seed for reproducible data
    #[arg(long)]
    rng_seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::builder()
        .level(LogLevel::Info)
        .output(LogOutput::Console)
        .log_file_prefix("museum-seed")
        .build()
        .merge_env()?;
    let _guard = init_logging(&log_config)?;

    let config = Config::load()?;
    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    let mut rng = match cli.rng_seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_entropy(),
    };
    let today = chrono::Local::now().date_naive();

    let report = seed::seed(&pool, cli.count, today, &mut rng).await?;

    info!(
        created = report.created,
        skipped = report.skipped,
        operator_created = report.operator_created,
        operator = seed::ADMIN_USERNAME,
        "Seeding finished"
    );

    pool.close().await;
    Ok(())
}
