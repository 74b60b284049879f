// Application layer - Layout use cases
pub mod drag_drop;
pub mod key_value_store;
pub mod layout_service;
