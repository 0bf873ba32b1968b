//! Rental Domain Model
//!
//! A booking of a car, plus optional equipment, for an inclusive date range.
//! Pricing lives here: the car's starting fee, its daily price and every
//! equipment item's daily price, converted into the rental's currency.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::car::Car;
use super::client::{Client, ClientRef};
use super::equipment::Equipment;
use super::id::{CarId, ClientId, EquipmentId, RentalId};
use super::rate::{Currency, Rate};
use crate::shared::errors::DomainError;

/// Decimal places kept on computed prices
const PRICE_SCALE: u32 = 2;

/// Most equipment items a single rental may hold
pub const MAX_EQUIPMENT_ITEMS: usize = 20;

/// Data required to assemble a rental from references
#[derive(Debug, Clone)]
pub struct RentalDraft {
    pub id: Option<RentalId>,
    pub rent_date: NaiveDate,
    pub return_date: NaiveDate,
    pub car_id: CarId,
    pub client_id: ClientId,
    pub equipment_ids: Vec<EquipmentId>,
    pub currency: Currency,
    pub total_price: Option<Decimal>,
}

/// Rental domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Rental {
    id: Option<RentalId>,
    rent_date: NaiveDate,
    return_date: NaiveDate,
    equipment: Vec<Equipment>,
    car: Car,
    client: ClientRef,
    currency: Currency,
    total_price: Option<Decimal>,
}

impl Rental {
    /// Start building a new rental
    #[must_use]
    pub fn builder() -> RentalBuilder {
        RentalBuilder::default()
    }

    /// Number of billed days. Both the rent and the return day count.
    ///
    /// A return date before the rent date is not rejected here and yields
    /// zero or a negative count.
    #[must_use]
    pub fn number_of_days_for_rent(&self) -> i64 {
        (self.return_date - self.rent_date).num_days() + 1
    }

    fn car_price(&self, days: Decimal) -> Decimal {
        self.car.starting_price() + self.car.price_per_day() * days
    }

    fn equipment_price(&self, days: Decimal) -> Decimal {
        self.equipment.iter().map(|e| e.price_per_day() * days).sum()
    }

    /// Compute the total price in the rental's currency and store it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRentalPeriod` when the return date precedes
    /// the rent date.
    pub fn calculate_total_price(&mut self, rate: &Rate) -> Result<Decimal, DomainError> {
        let days = self.number_of_days_for_rent();
        if days < 1 {
            return Err(DomainError::InvalidRentalPeriod {
                rent_date: self.rent_date,
                return_date: self.return_date,
            });
        }

        let days = Decimal::from(days);
        let base = self.car_price(days) + self.equipment_price(days);
        let total = (base * rate.multiplier(self.currency))
            .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);

        self.total_price = Some(total);
        Ok(total)
    }

    /// Replace the total price without recalculating it
    pub fn override_total_price(&mut self, total_price: Decimal) {
        self.total_price = Some(total_price);
    }

    /// Append one equipment item.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EquipmentLimitExceeded` when the rental already
    /// holds [`MAX_EQUIPMENT_ITEMS`] items.
    pub fn add_equipment(&mut self, equipment: Equipment) -> Result<(), DomainError> {
        if self.equipment.len() >= MAX_EQUIPMENT_ITEMS {
            return Err(DomainError::EquipmentLimitExceeded {
                limit: MAX_EQUIPMENT_ITEMS,
            });
        }
        self.equipment.push(equipment);
        Ok(())
    }

    /// Remove the first entry equal to `equipment`. Returns whether one was removed.
    pub fn remove_equipment(&mut self, equipment: &Equipment) -> bool {
        match self.equipment.iter().position(|e| e == equipment) {
            Some(index) => {
                self.equipment.remove(index);
                true
            }
            None => false,
        }
    }

    /// Assign the identifier given by the store
    #[must_use]
    pub fn with_id(self, id: RentalId) -> Self {
        Self { id: Some(id), ..self }
    }

    /// Attach the loaded client, replacing a bare reference
    #[must_use]
    pub fn with_client(self, client: Client) -> Self {
        Self {
            client: ClientRef::Loaded(client),
            ..self
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> Option<RentalId> {
        self.id
    }

    #[must_use]
    pub fn rent_date(&self) -> NaiveDate {
        self.rent_date
    }

    #[must_use]
    pub fn return_date(&self) -> NaiveDate {
        self.return_date
    }

    #[must_use]
    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    #[must_use]
    pub fn car(&self) -> &Car {
        &self.car
    }

    #[must_use]
    pub fn client(&self) -> &ClientRef {
        &self.client
    }

    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    #[must_use]
    pub fn total_price(&self) -> Option<Decimal> {
        self.total_price
    }
}

/// Step-by-step construction of a [`Rental`]
#[derive(Debug, Default)]
pub struct RentalBuilder {
    id: Option<RentalId>,
    rent_date: Option<NaiveDate>,
    return_date: Option<NaiveDate>,
    equipment: Vec<Equipment>,
    car: Option<Car>,
    client: Option<ClientRef>,
    currency: Currency,
    total_price: Option<Decimal>,
}

impl RentalBuilder {
    #[must_use]
    pub fn id(mut self, id: RentalId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn rent_date(mut self, rent_date: NaiveDate) -> Self {
        self.rent_date = Some(rent_date);
        self
    }

    #[must_use]
    pub fn return_date(mut self, return_date: NaiveDate) -> Self {
        self.return_date = Some(return_date);
        self
    }

    /// Append one equipment item
    #[must_use]
    pub fn equipment(mut self, equipment: Equipment) -> Self {
        self.equipment.push(equipment);
        self
    }

    #[must_use]
    pub fn car(mut self, car: Car) -> Self {
        self.car = Some(car);
        self
    }

    #[must_use]
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(ClientRef::Loaded(client));
        self
    }

    /// Reference a client without loading it
    #[must_use]
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.client = Some(ClientRef::Unloaded(client_id));
        self
    }

    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    #[must_use]
    pub fn total_price(mut self, total_price: Decimal) -> Self {
        self.total_price = Some(total_price);
        self
    }

    /// Finish the rental.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if rent date, return date, car or
    /// client was not provided, and `DomainError::EquipmentLimitExceeded` if
    /// more than [`MAX_EQUIPMENT_ITEMS`] items were added.
    pub fn build(self) -> Result<Rental, DomainError> {
        if self.equipment.len() > MAX_EQUIPMENT_ITEMS {
            return Err(DomainError::EquipmentLimitExceeded {
                limit: MAX_EQUIPMENT_ITEMS,
            });
        }
        Ok(Rental {
            id: self.id,
            rent_date: self.rent_date.ok_or(DomainError::MissingField("rent_date"))?,
            return_date: self.return_date.ok_or(DomainError::MissingField("return_date"))?,
            equipment: self.equipment,
            car: self.car.ok_or(DomainError::MissingField("car"))?,
            client: self.client.ok_or(DomainError::MissingField("client"))?,
            currency: self.currency,
            total_price: self.total_price,
        })
    }
}
