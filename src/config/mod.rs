use std::env;
use std::path::PathBuf;

/// Config holds the startup configuration for a generation run
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub inventory_table: String,
    pub mgmt_ip_column: String,
    pub checks_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn load() -> Self {
        Self {
            db_path: get_env("SWITCHGEN_DB_PATH", "db/db.sqlite").into(),
            inventory_table: get_env("SWITCHGEN_INVENTORY_TABLE", "Prechecks"),
            mgmt_ip_column: get_env("SWITCHGEN_MGMT_IP_COLUMN", "invetory_mgmt_ip"),
            checks_dir: get_env("SWITCHGEN_CHECKS_DIR", "output/checks/campus").into(),
            templates_dir: get_env("SWITCHGEN_TEMPLATES_DIR", "templates").into(),
        }
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(
        mut self,
        db_path: Option<PathBuf>,
        checks_dir: Option<PathBuf>,
        templates_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(p) = db_path {
            self.db_path = p;
        }
        if let Some(p) = checks_dir {
            self.checks_dir = p;
        }
        if let Some(p) = templates_dir {
            self.templates_dir = p;
        }
        self
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_values() {
        let cfg = Config {
            db_path: "db/db.sqlite".into(),
            inventory_table: "Prechecks".into(),
            mgmt_ip_column: "invetory_mgmt_ip".into(),
            checks_dir: "output/checks/campus".into(),
            templates_dir: "templates".into(),
        }
        .with_overrides(None, Some("/tmp/checks".into()), None);

        assert_eq!(cfg.db_path, PathBuf::from("db/db.sqlite"));
        assert_eq!(cfg.checks_dir, PathBuf::from("/tmp/checks"));
        assert_eq!(cfg.templates_dir, PathBuf::from("templates"));
    }
}
