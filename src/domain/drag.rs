// Drag-and-drop events - Section reorders and component moves
use serde::{Deserialize, Serialize};

/// Container id used by the section-level drop zone.
pub const SECTION_CONTAINER_ID: &str = "dashboard-sections";

/// A completed drag, tagged by which ordering it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragEvent {
    SectionReorder {
        source_index: usize,
        destination_index: usize,
    },
    ComponentMove {
        component_id: String,
        from_section: String,
        to_section: String,
        destination_index: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    pub container_id: String,
    pub index: usize,
}

/// Untagged drag-end payload as emitted by drag-and-drop widgets, where the
/// intent is carried by the container ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub dragged_id: String,
    pub source: DropLocation,
    #[serde(default)]
    pub destination: Option<DropLocation>,
}

impl DragEnd {
    /// `None` when the drag was cancelled or dropped outside any target.
    pub fn classify(self) -> Option<DragEvent> {
        let destination = self.destination?;

        if self.source.container_id == SECTION_CONTAINER_ID
            && destination.container_id == SECTION_CONTAINER_ID
        {
            return Some(DragEvent::SectionReorder {
                source_index: self.source.index,
                destination_index: destination.index,
            });
        }

        Some(DragEvent::ComponentMove {
            component_id: self.dragged_id,
            from_section: self.source.container_id,
            to_section: destination.container_id,
            destination_index: destination.index,
        })
    }
}
