use registrar_adapters::{config::PostgresSettings, persistence::MIGRATOR};
use registrar_core::PasswordHasherError;
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Failures while wiring the service together.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Password hasher error: {0}")]
    PasswordHasher(#[from] PasswordHasherError),
}

/// Configure and return a PostgreSQL connection pool
///
/// Connects with the configured URL and pool size, then runs all pending
/// migrations. The migrations create the unique username/email indexes the
/// registration workflow relies on and seed the `USER` role.
///
/// # Returns
/// A configured PgPool ready for use
#[tracing::instrument(name = "Configuring PostgreSQL", skip_all)]
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, StartupError> {
    let pg_pool = get_postgres_pool(settings.url.expose_secret(), settings.max_connections).await?;

    // Run database migrations
    MIGRATOR.run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Upper bound on pooled connections
///
/// # Returns
/// Result containing the PgPool or an error
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
