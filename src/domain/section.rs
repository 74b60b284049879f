// Section registry - Static metadata for dashboard sections
use super::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

impl SectionConfig {
    pub fn new(id: String, title: String, description: String, icon: String, color: String) -> Self {
        Self {
            id,
            title,
            description,
            icon,
            color,
        }
    }
}

/// Ordered set of known sections plus the widgets each one starts with.
///
/// Registry order doubles as the default section order.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<SectionConfig>,
    index: HashMap<String, usize>,
    default_components: BTreeMap<String, Vec<String>>,
}

impl SectionRegistry {
    pub fn new(entries: Vec<(SectionConfig, Vec<String>)>) -> Result<Self> {
        let mut sections = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        let mut default_components = BTreeMap::new();

        for (section, components) in entries {
            if index.contains_key(&section.id) {
                return Err(LayoutError::DuplicateSection(section.id));
            }
            index.insert(section.id.clone(), sections.len());
            default_components.insert(section.id.clone(), components);
            sections.push(section);
        }

        Ok(Self {
            sections,
            index,
            default_components,
        })
    }

    pub fn get(&self, id: &str) -> Option<&SectionConfig> {
        self.index.get(id).map(|&i| &self.sections[i])
    }

    pub fn sections(&self) -> &[SectionConfig] {
        &self.sections
    }

    pub fn default_order(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    /// Every registered section, visible.
    pub fn default_visibility(&self) -> BTreeMap<String, bool> {
        self.sections.iter().map(|s| (s.id.clone(), true)).collect()
    }

    pub fn default_components(&self) -> &BTreeMap<String, Vec<String>> {
        &self.default_components
    }
}
