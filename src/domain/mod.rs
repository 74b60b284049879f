// Domain layer - Dashboard layout model
pub mod component;
pub mod dashboard;
pub mod drag;
pub mod error;
pub mod layout;
pub mod section;
