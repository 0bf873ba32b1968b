//! Equipment Domain Model
//!
//! Optional rental add-ons (baby seat, trailer, ...) with their own daily price.

use rust_decimal::Decimal;

use super::id::EquipmentId;

/// Equipment domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    id: EquipmentId,
    name: String,
    description: String,
    price_per_day: Decimal,
}

impl Equipment {
    /// Restore an Equipment from persisted data
    #[must_use]
    pub fn restore(id: EquipmentId, name: String, description: String, price_per_day: Decimal) -> Self {
        Self {
            id,
            name,
            description,
            price_per_day,
        }
    }

    #[must_use]
    pub fn id(&self) -> EquipmentId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn price_per_day(&self) -> Decimal {
        self.price_per_day
    }
}
