// Dashboard view - What a renderer draws, top to bottom
use super::component::ComponentLayout;
use super::layout::LayoutState;
use super::section::{SectionConfig, SectionRegistry};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSection {
    #[serde(flatten)]
    pub config: SectionConfig,
    pub components: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub drag_mode_enabled: bool,
    pub sections: Vec<DashboardSection>,
}

impl Dashboard {
    /// Sections that are both registered and visible, in layout order.
    /// Anything else is left out without complaint.
    pub fn render(
        state: &LayoutState,
        components: &ComponentLayout,
        registry: &SectionRegistry,
    ) -> Self {
        let sections = state
            .section_order
            .iter()
            .filter(|id| state.is_visible(id))
            .filter_map(|id| registry.get(id))
            .map(|config| DashboardSection {
                config: config.clone(),
                components: components.component_ids(&config.id),
            })
            .collect();

        Self {
            drag_mode_enabled: state.drag_mode_enabled,
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::tests::sample_registry;

    fn section_ids(dashboard: &Dashboard) -> Vec<&str> {
        dashboard.sections.iter().map(|s| s.config.id.as_str()).collect()
    }

    #[test]
    fn test_render_follows_order_and_visibility() {
        let registry = sample_registry();
        let components = ComponentLayout::from_defaults(registry.default_components());
        let mut state = LayoutState::from_registry(&registry);
        state.reorder_sections(0, 2).unwrap();
        state.toggle_section_visibility("d");

        let dashboard = Dashboard::render(&state, &components, &registry);
        assert_eq!(section_ids(&dashboard), vec!["b", "c", "a", "e", "f"]);
        assert_eq!(dashboard.sections[0].components, vec!["b-1", "b-2"]);
    }

    #[test]
    fn test_render_skips_unregistered_ids() {
        let registry = sample_registry();
        let components = ComponentLayout::default();
        let mut state = LayoutState::from_registry(&registry);
        state.section_order.insert(1, "retired-section".to_string());

        let dashboard = Dashboard::render(&state, &components, &registry);
        assert_eq!(section_ids(&dashboard), vec!["a", "b", "c", "d", "e", "f"]);
        assert!(dashboard.sections.iter().all(|s| s.components.is_empty()));
    }

    #[test]
    fn test_render_omits_registered_sections_missing_from_order() {
        let registry = sample_registry();
        let components = ComponentLayout::default();
        let mut state = LayoutState::from_registry(&registry);
        state.section_order.retain(|id| id != "f");

        let dashboard = Dashboard::render(&state, &components, &registry);
        assert_eq!(dashboard.sections.len(), 5);
    }
}
