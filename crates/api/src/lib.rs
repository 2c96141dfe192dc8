//! HTTP layer: handlers, routes, middleware, and server configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
