use serde_json::{Map, Value};
use tera::Context;

use crate::error::{GenError, Result};
use crate::models::{MgmtInterface, Switch, Vlan};

/// RenderContext is everything a template sees for one switch.
///
/// Merged configuration keys sit at the top level; switch facts are inserted
/// after them and win on collision.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub config: Map<String, Value>,
    pub vlans: Vec<Vlan>,
    pub hostname: String,
    pub mgmt_ip: String,
    pub model: String,
    pub mgmt_interface: Option<MgmtInterface>,
    pub generated_at: String,
}

impl RenderContext {
    pub fn new(
        switch: &Switch,
        vlans: Vec<Vlan>,
        mgmt_interface: Option<MgmtInterface>,
        config: Value,
        generated_at: &str,
    ) -> Self {
        let config = match config {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            config,
            vlans,
            hostname: switch.hostname.clone(),
            mgmt_ip: switch.management_ip.clone(),
            model: switch.model.clone(),
            mgmt_interface,
            generated_at: generated_at.to_string(),
        }
    }

    pub fn to_tera(&self) -> Result<Context> {
        let mut ctx = Context::from_value(Value::Object(self.config.clone()))
            .map_err(|e| GenError::template(&self.hostname, &e))?;

        ctx.insert("vlans", &self.vlans);
        ctx.insert("hostname", &self.hostname);
        ctx.insert("mgmt_ip", &self.mgmt_ip);
        ctx.insert("model", &self.model);
        ctx.insert("generated_at", &self.generated_at);
        if let Some(mgmt) = &self.mgmt_interface {
            ctx.insert("mgmt_interface", &mgmt.name);
            ctx.insert("mgmt_subnet", &mgmt.mask);
        }
        Ok(ctx)
    }
}
