//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{
    CarRepository, ClientRepository, EquipmentRepository, Fetch, FetchPlan, RateProvider,
    RentalRepository,
};
pub use models::{
    Car, CarId, Client, ClientId, ClientRef, Currency, Equipment, EquipmentId, Gearbox, Rate,
    Rental, RentalBuilder, RentalDraft, RentalId,
};
