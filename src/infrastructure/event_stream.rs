// Server-sent event streaming of layout snapshots
use crate::application::layout_service::LayoutSnapshot;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::StreamExt;
use futures::stream::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Name of the SSE event carrying a snapshot
pub const LAYOUT_EVENT: &str = "layout";

/// Current snapshot first, then one event per change. Ends when the layout
/// service is disposed.
pub fn layout_event_stream(
    rx: watch::Receiver<LayoutSnapshot>,
) -> impl Stream<Item = Result<Event, axum::Error>> + Send + 'static {
    WatchStream::new(rx).map(|snapshot| Event::default().event(LAYOUT_EVENT).json_data(&snapshot))
}

/// Helper to create an SSE response from a subscription
pub fn sse_from_receiver(
    rx: watch::Receiver<LayoutSnapshot>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>> + Send + 'static> {
    Sse::new(layout_event_stream(rx)).keep_alive(KeepAlive::default())
}
