use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::facts::documents::read_document;

/// Hardware model → template file name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TemplateMap {
    models: BTreeMap<String, String>,
}

impl Default for TemplateMap {
    fn default() -> Self {
        let models = [
            ("C9300-48UXM", "9300.j2"),
            ("4506-E", "4500.j2"),
            ("2960X", "2960x.j2"),
        ]
        .into_iter()
        .map(|(model, file)| (model.to_string(), file.to_string()))
        .collect();
        Self { models }
    }
}

impl TemplateMap {
    /// Load a replacement table from a YAML/JSON mapping of model to file name
    pub fn from_file(path: &Path) -> Result<Self> {
        read_document(path)
    }

    pub fn get(&self, model: &str) -> Option<&str> {
        self.models.get(model).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// TemplateSelector decides which template renders a given switch
#[derive(Debug, Clone)]
pub enum TemplateSelector {
    /// Look the model up in a table
    ByModel(TemplateMap),
    /// Render every switch with the same template
    Fixed(String),
}

impl TemplateSelector {
    pub fn select(&self, model: &str) -> Option<&str> {
        match self {
            TemplateSelector::ByModel(map) => map.get(model),
            TemplateSelector::Fixed(name) => Some(name.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_models() {
        let map = TemplateMap::default();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("C9300-48UXM"), Some("9300.j2"));
        assert_eq!(map.get("4506-E"), Some("4500.j2"));
        assert_eq!(map.get("2960X"), Some("2960x.j2"));
        assert_eq!(map.get("WS-C3850-24T"), None);
        assert_eq!(map.get("c9300-48uxm"), None);
    }

    #[test]
    fn test_fixed_selector_ignores_model() {
        let selector = TemplateSelector::Fixed("campus.j2".into());
        assert_eq!(selector.select("anything"), Some("campus.j2"));
    }

    #[test]
    fn test_map_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.yaml");
        std::fs::write(&path, "C9200L-48P: 9200.j2\n2960X: legacy.j2\n").unwrap();

        let selector = TemplateSelector::ByModel(TemplateMap::from_file(&path).unwrap());
        assert_eq!(selector.select("C9200L-48P"), Some("9200.j2"));
        assert_eq!(selector.select("2960X"), Some("legacy.j2"));
        assert_eq!(selector.select("C9300-48UXM"), None);
    }
}
