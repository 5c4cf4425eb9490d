use crate::models::{RawVlan, Vlan};

/// The default VLAN, never rendered
pub const DEFAULT_VLAN: &str = "1";

/// VLAN ids kept off trunk ports
pub const NON_TRUNK_VLANS: &[&str] = &["666", DEFAULT_VLAN];

/// Whether a VLAN id may traverse trunk ports
pub fn is_trunked(vlan_id: &str) -> bool {
    !NON_TRUNK_VLANS.contains(&vlan_id)
}

/// Normalize raw VLAN records, dropping the default VLAN and preserving order
pub fn normalize(raw: &[RawVlan]) -> Vec<Vlan> {
    raw.iter()
        .filter(|v| v.vlan_id != DEFAULT_VLAN)
        .map(|v| Vlan {
            id: v.vlan_id.clone(),
            name: v.vlan_name.clone(),
            trunk: is_trunked(&v.vlan_id),
            ap: v.ap,
        })
        .collect()
}

/// Comma-joined ids of trunked VLANs
pub fn trunk_ids(vlans: &[Vlan], sep: &str) -> String {
    join_ids(vlans.iter().filter(|v| v.trunk), sep)
}

/// Comma-joined ids of VLANs carried to access points
pub fn ap_ids(vlans: &[Vlan], sep: &str) -> String {
    join_ids(vlans.iter().filter(|v| v.ap), sep)
}

fn join_ids<'a>(vlans: impl Iterator<Item = &'a Vlan>, sep: &str) -> String {
    vlans.map(|v| v.id.as_str()).collect::<Vec<_>>().join(sep)
}
