//! Car Rental API
//!
//! A Rust-based microservice for managing car rentals, their equipment
//! add-ons and currency-converted pricing, following Clean/Hexagonal
//! Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
