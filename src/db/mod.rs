pub(crate) mod row_helpers;
mod switches;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::path::Path;

use crate::error::{GenError, Result};
use crate::models::Switch;

pub use switches::SwitchRepo;

/// Store wraps a read-only connection to the switch inventory database.
#[derive(Clone)]
pub struct Store {
    pool: Pool<Sqlite>,
}

impl Store {
    /// Open the inventory database. A missing file is an error, never created.
    pub async fn open(db_path: &Path) -> Result<Self> {
        if !db_path.is_file() {
            return Err(GenError::data_source(format!(
                "inventory database not found: {}",
                db_path.display()
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| GenError::sqlx("failed to connect to database", e))?;

        Ok(Self { pool })
    }

    pub async fn list_switches(&self, table: &str, mgmt_ip_column: &str) -> Result<Vec<Switch>> {
        SwitchRepo::list(&self.pool, table, mgmt_ip_column).await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
