use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tera::{Tera, Value};

use crate::error::{GenError, Result};
use crate::models::Vlan;
use crate::vlans;

use super::RenderContext;

/// TemplateRenderer owns a Tera instance loaded from disk
pub struct TemplateRenderer {
    tera: Tera,
    source: PathBuf,
}

impl TemplateRenderer {
    /// Load every template under `dir` so includes and inheritance resolve.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(GenError::missing_file(dir));
        }

        let glob = format!("{}/**/*", dir.display());
        let mut tera = Tera::new(&glob)
            .map_err(|e| GenError::template(dir.display().to_string(), &e))?;
        tera.autoescape_on(vec![]);

        Ok(Self {
            tera,
            source: dir.to_path_buf(),
        })
    }

    /// Load a single template file, registered under its file name.
    ///
    /// Sibling files sharing its extension are loaded too so includes resolve.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(GenError::missing_file(path));
        }
        let name = template_name(path);
        let source = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tera = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => {
                let glob = format!("{}/*.{}", source.display(), ext);
                Tera::new(&glob).map_err(|e| GenError::template(&name, &e))?
            }
            None => Tera::default(),
        };
        tera.autoescape_on(vec![]);
        tera.add_template_file(path, Some(name.as_str()))
            .map_err(|e| GenError::template(&name, &e))?;

        Ok(Self { tera, source })
    }

    /// Render `name` for one switch.
    ///
    /// The VLAN helpers are re-registered per call so each switch only ever
    /// sees its own VLANs.
    pub fn render(&mut self, name: &str, ctx: &RenderContext) -> Result<String> {
        if self.tera.get_template(name).is_err() {
            return Err(GenError::missing_file(self.source.join(name)));
        }

        self.tera.register_function(
            "trunk_vlans",
            vlan_list_helper(ctx.vlans.clone(), vlans::trunk_ids),
        );
        self.tera.register_function(
            "ap_vlans",
            vlan_list_helper(ctx.vlans.clone(), vlans::ap_ids),
        );

        let context = ctx.to_tera()?;
        self.tera
            .render(name, &context)
            .map_err(|e| GenError::template(name, &e))
    }
}

/// File name of a template path, used as its Tera name
pub fn template_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Build a Tera function returning a joined VLAN id list.
/// Accepts an optional `sep` argument (default ",").
fn vlan_list_helper(
    vlans: Vec<Vlan>,
    join: fn(&[Vlan], &str) -> String,
) -> impl Fn(&HashMap<String, Value>) -> tera::Result<Value> + Send + Sync {
    move |args| {
        let sep = match args.get("sep") {
            None => ",",
            Some(Value::String(s)) => s.as_str(),
            Some(other) => {
                return Err(tera::Error::msg(format!(
                    "`sep` must be a string, got {}",
                    other
                )))
            }
        };
        Ok(Value::String(join(&vlans, sep)))
    }
}
