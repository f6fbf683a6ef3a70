use launchbot::{ Config, Result };
use migration::MigratorTrait;
use sea_orm::ConnectOptions;
use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber
        ::registry()
        .with(
            tracing_subscriber::EnvFilter
                ::try_from_default_env()
                .unwrap_or_else(|_| "launchbot=debug,sea_orm=info".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| launchbot::AppError::Config(e.to_string()))?;

    tracing::info!(
        engine = if config.is_sqlite() { "sqlite" } else { "postgres" },
        "Starting launchbot store"
    );

    // Initialize database connection
    let mut options = ConnectOptions::new(&config.database_url);
    options.max_connections(config.max_connections);

    let db = sea_orm::Database::connect(options).await?;

    tracing::info!("Database connected successfully");

    // Run migrations; every table and index is create-if-absent, so re-running
    // against an existing database is a no-op
    migration::Migrator::up(&db, None).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}
