use serde::{Deserialize, Deserializer, Serialize};

/// RawVlan is one record of a VLAN fact file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawVlan {
    #[serde(deserialize_with = "string_or_number")]
    pub vlan_id: String,
    pub vlan_name: String,
    /// Carried to access points
    #[serde(default)]
    pub ap: bool,
}

/// Vlan is the normalized shape exposed to templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vlan {
    pub id: String,
    pub name: String,
    pub trunk: bool,
    pub ap: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
}

/// Discovery exports VLAN ids as strings, hand-written files often as integers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
    })
}
