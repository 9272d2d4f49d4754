pub mod body_limit;
pub mod http;
pub mod telemetry;
