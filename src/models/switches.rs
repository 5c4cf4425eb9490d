use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Switch represents one inventory entry to generate a config for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    pub hostname: String,
    /// Management address, possibly with a CIDR suffix ("10.0.0.5/24")
    #[serde(default, alias = "mgmt_ip")]
    pub management_ip: String,
    #[serde(default)]
    pub model: String,
    /// Switch-specific override layer (files inventory only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl Switch {
    pub fn new(
        hostname: impl Into<String>,
        management_ip: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            management_ip: management_ip.into(),
            model: model.into(),
            config: None,
        }
    }

    /// Management IP with any "/prefix" suffix removed
    pub fn mgmt_address(&self) -> &str {
        self.management_ip
            .split('/')
            .next()
            .unwrap_or_default()
            .trim()
    }
}

/// SwitchesFile is the YAML inventory used by the `files` subcommand
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwitchesFile {
    /// Global overlay applied to every switch
    #[serde(default)]
    pub global: Option<Value>,
    #[serde(default)]
    pub switches: Vec<Switch>,
}
