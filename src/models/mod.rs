mod interfaces;
mod switches;
mod vlans;

pub use interfaces::{Interface, MgmtInterface};
pub use switches::{Switch, SwitchesFile};
pub use vlans::{RawVlan, Vlan};

/// Canonical fact file names under `<checks_dir>/<hostname>/`
pub mod fact_file {
    pub const VLANS: &str = "vlan_list.json";
    pub const INTERFACES: &str = "interfaces.json";
}
