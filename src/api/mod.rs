//! API Module
//!
//! HTTP handlers and routing for the cache REST API.
//!
//! # Endpoints
//! - `PUT /collections/:collection` - Store a value under a JSON key
//! - `POST /collections/:collection/get` - Look a JSON key up
//! - `POST /collections/:collection/clear` - Remove one key
//! - `POST /collections/:collection/clear-prefix` - Remove string keys by prefix
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
