// HTTP request handlers
use crate::application::drag_drop::DragResult;
use crate::application::layout_service::LayoutSnapshot;
use crate::domain::dashboard::Dashboard;
use crate::domain::drag::{DragEnd, DragEvent};
use crate::domain::error::LayoutError;
use crate::domain::section::SectionConfig;
use crate::infrastructure::event_stream::sse_from_receiver;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct DragModeRequest {
    /// Omitted means toggle
    pub enabled: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct MoveComponentRequest {
    pub component_id: String,
    pub from_section: String,
    pub to_section: String,
    pub new_index: usize,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Section registry, in default order
pub async fn list_sections(State(state): State<Arc<AppState>>) -> Json<Vec<SectionConfig>> {
    Json(state.layout_service.registry().sections().to_vec())
}

pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<LayoutSnapshot> {
    Json(state.layout_service.snapshot().await)
}

/// Visible sections with their widgets, ready to draw
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<Dashboard> {
    Json(state.layout_service.dashboard().await)
}

/// Live layout updates as server-sent events
pub async fn layout_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.layout_service.subscribe() {
        Some(rx) => sse_from_receiver(rx).into_response(),
        None => ApiError(LayoutError::Disposed).into_response(),
    }
}

pub async fn reorder_sections(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReorderRequest>,
) -> ApiResult<LayoutSnapshot> {
    let snapshot = state
        .layout_service
        .reorder_sections(request.start_index, request.end_index)
        .await?;
    Ok(Json(snapshot))
}

pub async fn toggle_section_visibility(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<LayoutSnapshot> {
    Ok(Json(state.layout_service.toggle_section_visibility(&id).await?))
}

pub async fn set_drag_mode(
    State(state): State<Arc<AppState>>,
    request: Option<Json<DragModeRequest>>,
) -> ApiResult<LayoutSnapshot> {
    let Json(request) = request.unwrap_or_default();
    let snapshot = match request.enabled {
        Some(enabled) => state.layout_service.set_drag_mode(enabled).await?,
        None => state.layout_service.toggle_drag_mode().await?,
    };
    Ok(Json(snapshot))
}

pub async fn reset_layout(State(state): State<Arc<AppState>>) -> ApiResult<LayoutSnapshot> {
    Ok(Json(state.layout_service.reset_to_default().await?))
}

pub async fn move_component(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoveComponentRequest>,
) -> ApiResult<LayoutSnapshot> {
    let snapshot = state
        .layout_service
        .move_component(
            &request.component_id,
            &request.from_section,
            &request.to_section,
            request.new_index,
        )
        .await?;
    Ok(Json(snapshot))
}

/// Tagged drag event
pub async fn handle_drag(
    State(state): State<Arc<AppState>>,
    Json(event): Json<DragEvent>,
) -> ApiResult<DragResult> {
    Ok(Json(state.drag_drop.handle(event).await?))
}

/// Untagged drag-end payload, intent inferred from container ids
pub async fn handle_drag_end(
    State(state): State<Arc<AppState>>,
    Json(end): Json<DragEnd>,
) -> ApiResult<DragResult> {
    Ok(Json(state.drag_drop.handle_drag_end(end).await?))
}
