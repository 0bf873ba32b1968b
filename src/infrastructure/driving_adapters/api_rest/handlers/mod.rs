//! HTTP Handlers
//!
//! Request handlers for API endpoints.

pub mod rentals;
