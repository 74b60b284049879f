// Layout state - Section ordering, visibility and the drag-mode gate
use super::error::{LayoutError, Result};
use super::section::SectionRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    pub section_order: Vec<String>,
    pub section_visibility: BTreeMap<String, bool>,
    #[serde(default)]
    pub drag_mode_enabled: bool,
}

impl LayoutState {
    pub fn new(section_order: Vec<String>, section_visibility: BTreeMap<String, bool>) -> Self {
        Self {
            section_order,
            section_visibility,
            drag_mode_enabled: false,
        }
    }

    pub fn from_registry(registry: &SectionRegistry) -> Self {
        Self::new(registry.default_order(), registry.default_visibility())
    }

    /// Move the section at `start_index` so that it ends up at `end_index`.
    ///
    /// An `end_index` at or past the end appends. A `start_index` outside the
    /// list is rejected without touching the order.
    pub fn reorder_sections(&mut self, start_index: usize, end_index: usize) -> Result<()> {
        let len = self.section_order.len();
        if start_index >= len {
            return Err(LayoutError::IndexOutOfRange {
                index: start_index,
                len,
            });
        }

        let moved = self.section_order.remove(start_index);
        let end_index = end_index.min(self.section_order.len());
        self.section_order.insert(end_index, moved);
        Ok(())
    }

    /// Flip visibility for `id` and return the new value.
    pub fn toggle_section_visibility(&mut self, id: &str) -> bool {
        let visible = !self.is_visible(id);
        self.section_visibility.insert(id.to_string(), visible);
        visible
    }

    /// Sections without an explicit entry are visible.
    pub fn is_visible(&self, id: &str) -> bool {
        self.section_visibility.get(id).copied().unwrap_or(true)
    }

    pub fn reset(&mut self, registry: &SectionRegistry) {
        self.section_order = registry.default_order();
        self.section_visibility = registry.default_visibility();
    }
}
