use sqlx::{sqlite::SqliteRow, Row};

use crate::models::Switch;

/// Filter empty strings to None — used when DB stores '' instead of NULL
pub fn none_if_empty(opt: Option<String>) -> Option<String> {
    opt.filter(|s| !s.is_empty())
}

/// Map an inventory row (hostname, mgmt ip, model) to a Switch.
/// Columns are read by position so the IP column name can vary.
pub fn map_switch_row(row: &SqliteRow) -> Result<Switch, sqlx::Error> {
    let hostname: String = row.try_get(0)?;
    let management_ip: Option<String> = row.try_get(1)?;
    let model: Option<String> = row.try_get(2)?;

    Ok(Switch::new(
        hostname.trim(),
        none_if_empty(management_ip).unwrap_or_default(),
        none_if_empty(model).map(|m| m.trim().to_string()).unwrap_or_default(),
    ))
}
