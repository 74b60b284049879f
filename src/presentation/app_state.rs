// Application state for HTTP handlers
use crate::application::drag_drop::DragDropAdapter;
use crate::application::layout_service::LayoutService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub layout_service: Arc<LayoutService>,
    pub drag_drop: DragDropAdapter,
}

impl AppState {
    pub fn new(layout_service: Arc<LayoutService>) -> Self {
        let drag_drop = DragDropAdapter::new(layout_service.clone());
        Self {
            layout_service,
            drag_drop,
        }
    }
}
