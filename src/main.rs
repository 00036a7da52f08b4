use pantrychef::config::Config;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;

    // Create database if it doesn't exist
    if !sqlx::Sqlite::database_exists(&config.database_url).await? {
        info!("creating database {}", config.database_url);
        sqlx::Sqlite::create_database(&config.database_url).await?;
    }

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // Run migrations
    info!("running migrations");
    sqlx::migrate!("./migrations").run(&pool).await?;

    info!("database setup complete");

    Ok(())
}
