//! HTTP API layer for rosterd.
//!
//! This crate provides the administrative REST API:
//!
//! - **Endpoints**: roster upload, job history, templates
//! - **Extractors**: Authentication and role checks
//! - **Middleware**: Bearer-token resolution into the request context
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::router;
