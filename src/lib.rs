//! Vallam - Student-Assistant Adapter
//!
//! An adapter service that exposes two operations, `search` and
//! `fetch`, over two transport surfaces: a REST API and an MCP
//! server. Free-text queries are translated into structured calls
//! against the upstream core app, and backend responses are
//! normalized into fixed listing/detail shapes.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - query (free-text interpretation)
//!   - gateway (upstream backend access)
//!   - normalize (record normalization)
//!   - logic (shared search/fetch service)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, tools, protocol
//!
//! Both adapters call the same `AssistantService`, so for identical
//! input they produce identical payloads; only the outer envelope
//! differs.

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{Result, VallamError};
pub use crate::core::gateway::{GatewayError, StudentGateway};
pub use crate::core::services::Services;
pub use crate::core::types::*;
