// Infrastructure layer - Storage, configuration and HTTP plumbing
pub mod config;
pub mod event_stream;
pub mod file_store;
pub mod http_response;
pub mod memory_store;
