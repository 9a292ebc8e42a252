pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod server;
