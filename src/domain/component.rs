// Component positions - Per-section ordered widget lists
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentPosition {
    pub section_id: String,
    pub component_id: String,
    pub order: usize,
}

impl ComponentPosition {
    pub fn new(section_id: String, component_id: String, order: usize) -> Self {
        Self {
            section_id,
            component_id,
            order,
        }
    }
}

/// Widget placement across all sections.
///
/// Within each section `order` is always `0..n` after a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentLayout {
    sections: BTreeMap<String, Vec<ComponentPosition>>,
}

impl ComponentLayout {
    pub fn from_defaults(defaults: &BTreeMap<String, Vec<String>>) -> Self {
        let sections = defaults
            .iter()
            .map(|(section_id, components)| {
                let positions = components
                    .iter()
                    .enumerate()
                    .map(|(order, component_id)| {
                        ComponentPosition::new(section_id.clone(), component_id.clone(), order)
                    })
                    .collect();
                (section_id.clone(), positions)
            })
            .collect();
        Self { sections }
    }

    /// Take `component_id` out of `from_section` and place it at `new_index`
    /// in `to_section`.
    ///
    /// The component is inserted even when `from_section` does not hold it.
    /// An index past the end of the destination appends.
    pub fn move_component(
        &mut self,
        component_id: &str,
        from_section: &str,
        to_section: &str,
        new_index: usize,
    ) {
        if let Some(source) = self.sections.get_mut(from_section) {
            source.retain(|p| p.component_id != component_id);
            reindex(source);
        }

        let destination = self.sections.entry(to_section.to_string()).or_default();
        let insert_at = new_index.min(destination.len());
        destination.insert(
            insert_at,
            ComponentPosition::new(to_section.to_string(), component_id.to_string(), new_index),
        );
        reindex(destination);
    }

    pub fn positions(&self, section_id: &str) -> &[ComponentPosition] {
        self.sections
            .get(section_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Component ids of a section in display order.
    pub fn component_ids(&self, section_id: &str) -> Vec<String> {
        let mut positions: Vec<&ComponentPosition> = self.positions(section_id).iter().collect();
        positions.sort_by_key(|p| p.order);
        positions.into_iter().map(|p| p.component_id.clone()).collect()
    }

    pub fn total_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }
}

fn reindex(positions: &mut [ComponentPosition]) {
    for (order, position) in positions.iter_mut().enumerate() {
        position.order = order;
    }
}
