//! PostgreSQL Repositories
//!
//! SQLx-backed implementations of the repository gateways.

mod car;
mod client;
mod equipment;
mod rental;

pub use car::PostgresCarRepository;
pub use client::PostgresClientRepository;
pub use equipment::PostgresEquipmentRepository;
pub use rental::PostgresRentalRepository;
