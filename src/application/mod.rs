//! Application Layer
//!
//! Rental use cases. Each one orchestrates domain entities over gateway
//! traits and never touches a concrete adapter.

pub mod use_cases;
