// Presentation layer - HTTP surface over the layout service
pub mod app_state;
pub mod handlers;
pub mod routes;
