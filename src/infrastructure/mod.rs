// Infrastructure layer - External dependencies and adapters
pub mod bcogc_client;
pub mod config;
pub mod json_store;
