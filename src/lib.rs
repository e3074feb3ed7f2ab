//! inventory-api - articles and categories over HTTP/JSON
//!
//! Layers, leaf first:
//! - [`model`]: records and payload validation
//! - [`store`]: SQLite persistence
//! - [`http_server`]: axum routes, projections and error mapping
//! - [`cli`]: configuration and process entry

pub mod cli;
pub mod http_server;
pub mod model;
pub mod store;
