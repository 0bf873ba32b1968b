//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod car;
pub mod client;
pub mod equipment;
pub mod id;
pub mod rate;
pub mod rental;

#[cfg(test)]
pub(crate) mod fixtures;

pub use car::{Car, Gearbox};
pub use client::{Client, ClientRef};
pub use equipment::Equipment;
pub use id::{CarId, ClientId, EquipmentId, RentalId};
pub use rate::{Currency, Rate};
pub use rental::{Rental, RentalBuilder, RentalDraft, MAX_EQUIPMENT_ITEMS};
