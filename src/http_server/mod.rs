//! # Inventory HTTP Server
//!
//! Axum server exposing the inventory over JSON.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/articles`, `/articles/:id` - Article CRUD
//! - `/articles/recherche`, `/articles/search` - Keyword search
//! - `/categories` - Category create and list

pub mod article_routes;
pub mod category_routes;
pub mod config;
pub mod errors;
pub mod extract;
pub mod observability_routes;
pub mod request;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{RestError, RestResult};
pub use server::HttpServer;
