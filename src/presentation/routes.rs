// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboard, get_layout, handle_drag, handle_drag_end, health_check, layout_events,
    list_sections, move_component, reorder_sections, reset_layout, set_drag_mode,
    toggle_section_visibility,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/sections", get(list_sections))
        .route("/dashboard", get(get_dashboard))
        .route("/layout", get(get_layout))
        .route("/layout/events", get(layout_events))
        .route("/layout/sections/reorder", post(reorder_sections))
        .route("/layout/sections/:id/visibility", post(toggle_section_visibility))
        .route("/layout/drag-mode", post(set_drag_mode))
        .route("/layout/reset", post(reset_layout))
        .route("/layout/components/move", post(move_component))
        .route("/layout/drag", post(handle_drag))
        .route("/layout/drag-end", post(handle_drag_end))
        .with_state(state)
}
