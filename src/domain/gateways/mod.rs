//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod car_repository;
pub mod client_repository;
pub mod equipment_repository;
pub mod rate_provider;
pub mod rental_repository;

pub use car_repository::CarRepository;
pub use client_repository::ClientRepository;
pub use equipment_repository::EquipmentRepository;
pub use rate_provider::RateProvider;
pub use rental_repository::{Fetch, FetchPlan, RentalRepository};
