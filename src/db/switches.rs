use sqlx::{Pool, Sqlite};

use crate::error::{GenError, Result};
use crate::models::Switch;

use super::row_helpers::map_switch_row;

/// Inventory table operations
pub struct SwitchRepo;

impl SwitchRepo {
    /// List all switches in table order.
    pub async fn list(
        pool: &Pool<Sqlite>,
        table: &str,
        mgmt_ip_column: &str,
    ) -> Result<Vec<Switch>> {
        let query = format!(
            r#"SELECT hostname, "{}", model FROM "{}""#,
            ensure_identifier(mgmt_ip_column)?,
            ensure_identifier(table)?,
        );

        let rows = sqlx::query(&query)
            .fetch_all(pool)
            .await
            .map_err(|e| GenError::sqlx(format!("failed to read switches from {}", table), e))?;

        rows.iter()
            .map(|row| {
                map_switch_row(row)
                    .map_err(|e| GenError::sqlx(format!("malformed row in {}", table), e))
            })
            .collect()
    }
}

/// Table and column names come from the environment and end up in SQL text
fn ensure_identifier(name: &str) -> Result<&str> {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(name)
    } else {
        Err(GenError::data_source(format!("invalid SQL identifier: {:?}", name)))
    }
}
