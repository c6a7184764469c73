// Presentation layer - HTTP surface
pub mod api_error;
pub mod app_state;
pub mod handlers;
pub mod ip_json;
