//! Repository layer for database operations

pub mod catalog;
pub mod checkouts;
pub mod patrons;

use sqlx::{migrate::Migrator, Pool, Sqlite};

/// Schema migrations embedded at build time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub patrons: patrons::PatronsRepository,
    pub catalog: catalog::CatalogRepository,
    pub checkouts: checkouts::CheckoutsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            patrons: patrons::PatronsRepository::new(pool.clone()),
            catalog: catalog::CatalogRepository::new(pool.clone()),
            checkouts: checkouts::CheckoutsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database, used by the readiness probe
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
