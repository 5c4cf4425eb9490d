pub mod documents;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{fact_file, Interface, MgmtInterface, Switch, Vlan};
use crate::vlans;

pub use documents::{load_layer, load_raw_vlans, load_switches_file};

/// FactLoader reads per-host discovery snapshots from `<checks_dir>/<hostname>/`
#[derive(Debug, Clone)]
pub struct FactLoader {
    checks_dir: PathBuf,
}

impl FactLoader {
    pub fn new(checks_dir: impl Into<PathBuf>) -> Self {
        Self {
            checks_dir: checks_dir.into(),
        }
    }

    /// Expected location of a host's fact file, whether or not it exists
    pub fn fact_path(&self, hostname: &str, file_name: &str) -> PathBuf {
        self.checks_dir.join(hostname).join(file_name)
    }

    /// Path of the host's VLAN fact file, or None when absent
    pub fn vlan_file(&self, hostname: &str) -> Option<PathBuf> {
        existing(self.fact_path(hostname, fact_file::VLANS))
    }

    /// Path of the host's interface fact file, or None when absent
    pub fn interface_file(&self, hostname: &str) -> Option<PathBuf> {
        existing(self.fact_path(hostname, fact_file::INTERFACES))
    }

    /// Load and normalize VLANs. Malformed files are fatal.
    pub fn load_vlans(&self, path: &Path) -> Result<Vec<Vlan>> {
        let raw = load_raw_vlans(path)?;
        Ok(vlans::normalize(&raw))
    }

    /// Find the interface owning the switch's management IP.
    ///
    /// A missing interfaces file, an unmatched address or a match without a
    /// prefix length only warns; a malformed file is fatal.
    pub fn find_mgmt_interface(&self, switch: &Switch) -> Result<Option<MgmtInterface>> {
        let Some(path) = self.interface_file(&switch.hostname) else {
            tracing::warn!("interfaces.json not found for {}", switch.hostname);
            return Ok(None);
        };

        let interfaces: Vec<Interface> = documents::read_document(&path)?;
        let mgmt_ip = switch.mgmt_address();
        let Some(found) = match_mgmt_interface(&interfaces, mgmt_ip) else {
            tracing::warn!(
                "No matching interface found for IP {} on {}",
                mgmt_ip,
                switch.hostname
            );
            return Ok(None);
        };

        match found.prefix_length {
            Some(mask) => Ok(Some(MgmtInterface {
                name: found.interface.clone(),
                mask,
            })),
            None => {
                tracing::warn!(
                    "Interface {} on {} has no prefix length",
                    found.interface,
                    switch.hostname
                );
                Ok(None)
            }
        }
    }
}

/// First interface whose address equals `mgmt_ip` (no CIDR suffix)
pub fn match_mgmt_interface<'a>(
    interfaces: &'a [Interface],
    mgmt_ip: &str,
) -> Option<&'a Interface> {
    if mgmt_ip.is_empty() {
        return None;
    }
    interfaces
        .iter()
        .find(|i| i.ip_address.as_deref().map(str::trim) == Some(mgmt_ip))
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}
