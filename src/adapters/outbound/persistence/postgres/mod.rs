//! PostgreSQL persistence: pool setup, migrations and the account store.

mod account_repository;
mod models;

pub use account_repository::PgAccountRepository;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::application::error::{CatchExt, Result};
use crate::config::Postgres;

pub const DEFAULT_CREDENTIALS: &str = "postgres";
pub const DEFAULT_DATABASE_NAME: &str = "accounts";
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Open a connection pool described by `config`.
pub async fn connect(config: &Postgres) -> std::result::Result<PgPool, sqlx::Error> {
    let username = config.username.as_deref().unwrap_or(DEFAULT_CREDENTIALS);
    let password = config.password.as_deref().unwrap_or(DEFAULT_CREDENTIALS);
    let database = config.database.as_deref().unwrap_or(DEFAULT_DATABASE_NAME);

    let addr =
        format!("postgres://{username}:{password}@{}/{database}", config.address);
    let pool = PgPoolOptions::new()
        .max_connections(config.pool_size.unwrap_or(DEFAULT_POOL_SIZE))
        .connect(&addr)
        .await?;

    tracing::info!(hostname = %config.address, db = %database, "postgres connected");

    Ok(pool)
}

/// Apply pending schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await.catch_store()
}
