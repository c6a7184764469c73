// Application layer - Use cases and ports
pub mod ip_service;
pub mod production_source;
pub mod refresh_service;
pub mod snapshot_store;
