use serde::{Deserialize, Serialize};

/// Interface is one record of an interfaces fact file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Interface {
    pub interface: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub prefix_length: Option<u32>,
}

/// MgmtInterface is the interface owning a switch's management address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MgmtInterface {
    pub name: String,
    pub mask: u32,
}
