//! Car Domain Model
//!
//! A car offered for rent. Rentals reference cars; they never own them.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::id::CarId;

/// Transmission type of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gearbox {
    Manual,
    Automatic,
}

impl Gearbox {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "MANUAL",
            Self::Automatic => "AUTOMATIC",
        }
    }
}

impl fmt::Display for Gearbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gearbox {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MANUAL" => Ok(Self::Manual),
            "AUTOMATIC" => Ok(Self::Automatic),
            other => Err(format!("unknown gearbox '{other}'")),
        }
    }
}

/// Car domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    id: CarId,
    model: String,
    make: String,
    registration_number: String,
    engine: String,
    seats: i32,
    doors: i32,
    gearbox: Gearbox,
    starting_price: Decimal,
    price_per_day: Decimal,
}

impl Car {
    /// Restore a Car from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: CarId,
        model: String,
        make: String,
        registration_number: String,
        engine: String,
        seats: i32,
        doors: i32,
        gearbox: Gearbox,
        starting_price: Decimal,
        price_per_day: Decimal,
    ) -> Self {
        Self {
            id,
            model,
            make,
            registration_number,
            engine,
            seats,
            doors,
            gearbox,
            starting_price,
            price_per_day,
        }
    }

    #[must_use]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn make(&self) -> &str {
        &self.make
    }

    #[must_use]
    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    #[must_use]
    pub fn engine(&self) -> &str {
        &self.engine
    }

    #[must_use]
    pub fn seats(&self) -> i32 {
        self.seats
    }

    #[must_use]
    pub fn doors(&self) -> i32 {
        self.doors
    }

    #[must_use]
    pub fn gearbox(&self) -> Gearbox {
        self.gearbox
    }

    /// One-off fee charged per rental
    #[must_use]
    pub fn starting_price(&self) -> Decimal {
        self.starting_price
    }

    #[must_use]
    pub fn price_per_day(&self) -> Decimal {
        self.price_per_day
    }
}
