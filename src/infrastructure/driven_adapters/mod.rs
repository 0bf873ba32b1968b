//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Currency rate providers
//! - Configuration

pub mod config;
pub mod database;
pub mod rate_provider;
pub mod repositories;

pub use config::AppConfig;
pub use rate_provider::{NbpRateProvider, StaticRateProvider};
pub use repositories::{
    PostgresCarRepository, PostgresClientRepository, PostgresEquipmentRepository,
    PostgresRentalRepository,
};
