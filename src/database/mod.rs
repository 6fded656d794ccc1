use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

pub mod persons;

#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
}

impl Database {
    /// Builds a lazy pool for the given connection string. No connection is
    /// attempted until the first query runs against it.
    pub fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(20)
            .min_connections(1)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("migrations/sqlite").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}
