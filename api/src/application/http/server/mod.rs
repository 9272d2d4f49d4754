pub mod api_entities;
pub mod app_state;
pub mod fallback;
pub mod http_server;
pub mod openapi;
