pub mod health;
pub mod image;
pub mod index;
pub mod server;
