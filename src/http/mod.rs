//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from mcp/.
//!
//! Provides the REST endpoints for search, fetch, and health via
//! the Axum web framework.

pub mod handlers;
pub mod middleware;

pub use handlers::*;
