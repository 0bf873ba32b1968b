//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers for rentals
//! - DTOs for request/response

pub mod api_rest;
