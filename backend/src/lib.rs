//! Ecclesia backend: status, health and greeting endpoints for the web frontend.

pub mod config;
pub mod error;
pub mod routes;
pub mod shutdown;

pub use routes::build_router;
