use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::error::{Result, SkipReason};
use crate::facts::FactLoader;
use crate::merge::merge_layers;
use crate::models::{Switch, Vlan};
use crate::output::{is_valid_hostname, OutputWriter};
use crate::templates::{RenderContext, TemplateRenderer, TemplateSelector};

/// Where each switch's VLANs come from
#[derive(Debug, Clone)]
pub enum VlanSource {
    /// `<checks_dir>/<hostname>/vlan_list.json`; a missing file skips the switch
    PerHost,
    /// One list, already normalized, applied to every switch
    Shared(Vec<Vlan>),
}

/// Result of processing one switch
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchOutcome {
    Generated { hostname: String, path: PathBuf },
    Skipped { hostname: String, reason: SkipReason },
}

/// BatchSummary collects per-switch outcomes in inventory order
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<SwitchOutcome>,
}

impl BatchSummary {
    pub fn generated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SwitchOutcome::Generated { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.generated()
    }
}

/// Generator runs the fact → merge → render → write pipeline over a batch.
///
/// Switches are processed one at a time in the order given. A lookup miss
/// skips the switch; any other error stops the batch.
pub struct Generator {
    facts: FactLoader,
    vlan_source: VlanSource,
    selector: TemplateSelector,
    renderer: TemplateRenderer,
    writer: OutputWriter,
    base: Value,
    global: Value,
    print: bool,
    generated_at: String,
}

impl Generator {
    pub fn new(
        facts: FactLoader,
        selector: TemplateSelector,
        renderer: TemplateRenderer,
        writer: OutputWriter,
    ) -> Self {
        Self {
            facts,
            vlan_source: VlanSource::PerHost,
            selector,
            renderer,
            writer,
            base: empty_layer(),
            global: empty_layer(),
            print: false,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Set the base and global configuration layers
    pub fn with_layers(mut self, base: Value, global: Value) -> Self {
        self.base = base;
        self.global = global;
        self
    }

    pub fn with_vlan_source(mut self, source: VlanSource) -> Self {
        self.vlan_source = source;
        self
    }

    /// Echo each rendered config to stdout
    pub fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    pub fn run(&mut self, switches: &[Switch]) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        for switch in switches {
            let outcome = self.generate_one(switch)?;
            match &outcome {
                SwitchOutcome::Generated { hostname, path } => {
                    tracing::debug!("{} rendered to {}", hostname, path.display());
                }
                SwitchOutcome::Skipped { hostname, reason } => {
                    tracing::warn!("Skipping {}: {}", hostname, reason);
                }
            }
            summary.outcomes.push(outcome);
        }

        tracing::info!(
            "Generated {} configuration(s), skipped {}",
            summary.generated(),
            summary.skipped()
        );
        Ok(summary)
    }

    pub fn generate_one(&mut self, switch: &Switch) -> Result<SwitchOutcome> {
        let skip = |reason: SkipReason| -> Result<SwitchOutcome> {
            Ok(SwitchOutcome::Skipped {
                hostname: switch.hostname.clone(),
                reason,
            })
        };

        // 1. Hostname doubles as the output file name
        if !is_valid_hostname(&switch.hostname) {
            return skip(SkipReason::InvalidHostname);
        }

        // 2. VLANs
        let vlans = match &self.vlan_source {
            VlanSource::Shared(vlans) => vlans.clone(),
            VlanSource::PerHost => match self.facts.vlan_file(&switch.hostname) {
                Some(path) => self.facts.load_vlans(&path)?,
                None => {
                    let path = self
                        .facts
                        .fact_path(&switch.hostname, crate::models::fact_file::VLANS);
                    return skip(SkipReason::NoVlanFile { path });
                }
            },
        };

        // 3. Management interface (optional)
        let mgmt_interface = self.facts.find_mgmt_interface(switch)?;

        // 4. Template for this model
        let Some(template) = self.selector.select(&switch.model).map(str::to_string) else {
            return skip(SkipReason::NoTemplate {
                model: switch.model.clone(),
            });
        };

        // 5. Layers: base < global < switch
        let switch_layer = switch.config.clone().unwrap_or_else(empty_layer);
        let config = merge_layers(&self.base, &self.global, &switch_layer);

        // 6. Render and write
        let ctx = RenderContext::new(switch, vlans, mgmt_interface, config, &self.generated_at);
        let rendered = self.renderer.render(&template, &ctx)?;
        let path = self.writer.write(&switch.hostname, &rendered)?;

        if self.print {
            println!("\nConfiguration for {}:", switch.hostname);
            println!("{}", rendered);
            println!("{}", "-".repeat(80));
        }

        Ok(SwitchOutcome::Generated {
            hostname: switch.hostname.clone(),
            path,
        })
    }
}

fn empty_layer() -> Value {
    Value::Object(Map::new())
}
