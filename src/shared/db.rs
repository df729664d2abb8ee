use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
    #[error("Failed to connect to database: {0}")]
    Connection(#[from] DbErr),
}

/// Opens the connection pool described by `DATABASE_URL`.
///
/// Environment files are loaded first: `.env.{RUST_ENV}` when present,
/// otherwise plain `.env`. `RUST_ENV` defaults to `development`.
#[cfg(not(tarpaulin_include))]
pub async fn connect_from_env() -> Result<DatabaseConnection, DbConfigError> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = std::env::var("DATABASE_URL").map_err(|_| DbConfigError::MissingDatabaseUrl)?;

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}
