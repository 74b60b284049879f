// Drag-and-drop adapter - Routes drag-end events to the right layout mutation
use crate::application::layout_service::{LayoutService, LayoutSnapshot};
use crate::domain::drag::{DragEnd, DragEvent};
use crate::domain::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Dropped outside any target, or the drag was aborted
    Cancelled,
    DragModeDisabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum DragOutcome {
    SectionsReordered,
    ComponentMoved,
    Ignored(IgnoreReason),
}

/// What a drag did, with the layout as it stood right after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DragResult {
    #[serde(flatten)]
    pub outcome: DragOutcome,
    pub layout: LayoutSnapshot,
}

#[derive(Clone)]
pub struct DragDropAdapter {
    layout: Arc<LayoutService>,
}

impl DragDropAdapter {
    pub fn new(layout: Arc<LayoutService>) -> Self {
        Self { layout }
    }

    pub async fn handle(&self, event: DragEvent) -> Result<DragResult> {
        if !self.layout.is_drag_mode_enabled().await {
            debug!(?event, "drag ignored, drag mode is off");
            return Ok(self.ignored(IgnoreReason::DragModeDisabled).await);
        }

        match event {
            DragEvent::SectionReorder {
                source_index,
                destination_index,
            } => {
                let layout = self
                    .layout
                    .reorder_sections(source_index, destination_index)
                    .await?;
                Ok(DragResult {
                    outcome: DragOutcome::SectionsReordered,
                    layout,
                })
            }
            DragEvent::ComponentMove {
                component_id,
                from_section,
                to_section,
                destination_index,
            } => {
                let layout = self
                    .layout
                    .move_component(&component_id, &from_section, &to_section, destination_index)
                    .await?;
                Ok(DragResult {
                    outcome: DragOutcome::ComponentMoved,
                    layout,
                })
            }
        }
    }

    /// Accepts the untagged payload, inferring intent from container ids.
    pub async fn handle_drag_end(&self, end: DragEnd) -> Result<DragResult> {
        let dragged_id = end.dragged_id.clone();
        match end.classify() {
            Some(event) => self.handle(event).await,
            None => {
                debug!(dragged = %dragged_id, "drag cancelled without a destination");
                Ok(self.ignored(IgnoreReason::Cancelled).await)
            }
        }
    }

    async fn ignored(&self, reason: IgnoreReason) -> DragResult {
        DragResult {
            outcome: DragOutcome::Ignored(reason),
            layout: self.layout.snapshot().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::key_value_store::{KeyValueStore, SECTION_ORDER_KEY};
    use crate::domain::drag::{DropLocation, SECTION_CONTAINER_ID};
    use crate::domain::section::tests::sample_registry;
    use crate::infrastructure::memory_store::MemoryStore;

    async fn adapter(drag_mode: bool) -> (DragDropAdapter, Arc<LayoutService>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let layout = Arc::new(
            LayoutService::init(store.clone(), Arc::new(sample_registry()))
                .await
                .unwrap(),
        );
        layout.set_drag_mode(drag_mode).await.unwrap();
        (DragDropAdapter::new(layout.clone()), layout, store)
    }

    fn drag_end(dragged: &str, from: (&str, usize), to: Option<(&str, usize)>) -> DragEnd {
        DragEnd {
            dragged_id: dragged.to_string(),
            source: DropLocation {
                container_id: from.0.to_string(),
                index: from.1,
            },
            destination: to.map(|(container_id, index)| DropLocation {
                container_id: container_id.to_string(),
                index,
            }),
        }
    }

    #[tokio::test]
    async fn test_section_drag_reorders_and_persists() {
        let (adapter, layout, store) = adapter(true).await;

        let outcome = adapter
            .handle_drag_end(drag_end("a", (SECTION_CONTAINER_ID, 0), Some((SECTION_CONTAINER_ID, 2))))
            .await
            .unwrap();

        assert_eq!(outcome.outcome, DragOutcome::SectionsReordered);
        assert_eq!(outcome.layout, layout.snapshot().await);
        assert_eq!(
            layout.snapshot().await.layout.section_order,
            vec!["b", "c", "a", "d", "e", "f"]
        );
        assert!(store.get(SECTION_ORDER_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_component_drag_moves_component() {
        let (adapter, layout, _) = adapter(true).await;

        let outcome = adapter
            .handle(DragEvent::ComponentMove {
                component_id: "c-1".to_string(),
                from_section: "c".to_string(),
                to_section: "e".to_string(),
                destination_index: 1,
            })
            .await
            .unwrap();

        assert_eq!(outcome.outcome, DragOutcome::ComponentMoved);
        let snapshot = layout.snapshot().await;
        assert_eq!(snapshot.components.component_ids("c"), vec!["c-2"]);
        assert_eq!(snapshot.components.component_ids("e"), vec!["e-1", "c-1", "e-2"]);
    }

    #[tokio::test]
    async fn test_cancelled_drag_changes_nothing() {
        let (adapter, layout, store) = adapter(true).await;
        let before = layout.snapshot().await;

        let outcome = adapter
            .handle_drag_end(drag_end("d-1", ("d", 0), None))
            .await
            .unwrap();

        assert_eq!(outcome.outcome, DragOutcome::Ignored(IgnoreReason::Cancelled));
        assert_eq!(outcome.layout, before);
        assert_eq!(layout.snapshot().await, before);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_drag_mode_off_ignores_events() {
        let (adapter, layout, _) = adapter(false).await;
        let before = layout.snapshot().await;

        let outcome = adapter
            .handle(DragEvent::SectionReorder {
                source_index: 0,
                destination_index: 5,
            })
            .await
            .unwrap();

        assert_eq!(outcome.outcome, DragOutcome::Ignored(IgnoreReason::DragModeDisabled));
        assert_eq!(layout.snapshot().await, before);
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(DragOutcome::Ignored(IgnoreReason::Cancelled)).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "ignored", "reason": "cancelled"}));

        let json = serde_json::to_value(DragOutcome::ComponentMoved).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "component_moved"}));
    }
}
