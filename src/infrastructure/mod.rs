//! Infrastructure Layer
//!
//! Driving adapters (the `/v1/rents` HTTP API) and driven adapters
//! (PostgreSQL repositories, exchange rate providers, configuration).

pub mod driven_adapters;
pub mod driving_adapters;
