//! Rental DTOs
//!
//! Data transfer objects for rental API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::models::{
    Car, CarId, Client, ClientId, Currency, Equipment, EquipmentId, Rental, RentalDraft, RentalId,
};

/// Validates that the return date does not precede the rent date
fn validate_rental_period(dto: &RentalRequestDto) -> Result<(), ValidationError> {
    if dto.return_date < dto.rent_date {
        let mut error = ValidationError::new("rental_period");
        error.message = Some("returnDate must not be before rentDate".into());
        return Err(error);
    }
    Ok(())
}

/// Largest price the `NUMERIC(12, 2)` column holds is just below this
const TOTAL_PRICE_LIMIT: i64 = 10_000_000_000;

fn validate_total_price(price: &Decimal) -> Result<(), ValidationError> {
    let message = if price.is_sign_negative() {
        "totalPrice must not be negative"
    } else if *price >= Decimal::from(TOTAL_PRICE_LIMIT) {
        "totalPrice must be below 10000000000"
    } else if price.normalize().scale() > 2 {
        "totalPrice must have at most 2 decimal places"
    } else {
        return Ok(());
    };

    let mut error = ValidationError::new("total_price");
    error.message = Some(message.into());
    Err(error)
}

/// Currency as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyDto {
    #[default]
    Pln,
    Usd,
    Eur,
}

impl From<CurrencyDto> for Currency {
    fn from(dto: CurrencyDto) -> Self {
        match dto {
            CurrencyDto::Pln => Currency::Pln,
            CurrencyDto::Usd => Currency::Usd,
            CurrencyDto::Eur => Currency::Eur,
        }
    }
}

impl From<Currency> for CurrencyDto {
    fn from(currency: Currency) -> Self {
        match currency {
            Currency::Pln => CurrencyDto::Pln,
            Currency::Usd => CurrencyDto::Usd,
            Currency::Eur => CurrencyDto::Eur,
        }
    }
}

/// DTO for creating (POST) or updating (PUT) a rental
///
/// Without `id` the rental is created; with `id` it is created or replaced.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_rental_period"))]
pub struct RentalRequestDto {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: Option<i64>,

    pub rent_date: NaiveDate,

    pub return_date: NaiveDate,

    #[validate(range(min = 1, message = "carId must be positive"))]
    pub car_id: i64,

    #[validate(range(min = 1, message = "clientId must be positive"))]
    pub client_id: i64,

    #[serde(default)]
    #[validate(length(max = 20, message = "at most 20 equipment items per rental"))]
    pub equipment_ids: Vec<i64>,

    #[serde(default)]
    pub currency: CurrencyDto,

    #[validate(custom(function = "validate_total_price"))]
    pub total_price: Option<Decimal>,
}

impl From<RentalRequestDto> for RentalDraft {
    fn from(dto: RentalRequestDto) -> Self {
        Self {
            id: dto.id.map(RentalId::new),
            rent_date: dto.rent_date,
            return_date: dto.return_date,
            car_id: CarId::new(dto.car_id),
            client_id: ClientId::new(dto.client_id),
            equipment_ids: dto.equipment_ids.into_iter().map(EquipmentId::new).collect(),
            currency: dto.currency.into(),
            total_price: dto.total_price,
        }
    }
}

/// Car as embedded in a rental response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponseDto {
    pub id: i64,
    pub model: String,
    pub make: String,
    pub registration_number: String,
    pub engine: String,
    pub seats: i32,
    pub doors: i32,
    pub gearbox: String,
    pub starting_price: Decimal,
    pub price_per_day: Decimal,
}

impl From<&Car> for CarResponseDto {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id().value(),
            model: car.model().to_string(),
            make: car.make().to_string(),
            registration_number: car.registration_number().to_string(),
            engine: car.engine().to_string(),
            seats: car.seats(),
            doors: car.doors(),
            gearbox: car.gearbox().to_string(),
            starting_price: car.starting_price(),
            price_per_day: car.price_per_day(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponseDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl From<&Client> for ClientResponseDto {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id().value(),
            first_name: client.first_name().to_string(),
            last_name: client.last_name().to_string(),
            address: client.address().to_string(),
            email: client.email().to_string(),
            phone: client.phone().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentResponseDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price_per_day: Decimal,
}

impl From<&Equipment> for EquipmentResponseDto {
    fn from(equipment: &Equipment) -> Self {
        Self {
            id: equipment.id().value(),
            name: equipment.name().to_string(),
            description: equipment.description().to_string(),
            price_per_day: equipment.price_per_day(),
        }
    }
}

/// Rental response DTO
///
/// `client` is present only when the client was loaded with the rental.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponseDto {
    pub id: Option<i64>,
    pub rent_date: NaiveDate,
    pub return_date: NaiveDate,
    pub number_of_days: i64,
    pub car: CarResponseDto,
    pub client_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientResponseDto>,
    pub equipment: Vec<EquipmentResponseDto>,
    pub currency: CurrencyDto,
    pub total_price: Option<Decimal>,
}

impl From<&Rental> for RentalResponseDto {
    fn from(rental: &Rental) -> Self {
        Self {
            id: rental.id().map(RentalId::value),
            rent_date: rental.rent_date(),
            return_date: rental.return_date(),
            number_of_days: rental.number_of_days_for_rent(),
            car: CarResponseDto::from(rental.car()),
            client_id: rental.client().id().value(),
            client: rental.client().loaded().map(ClientResponseDto::from),
            equipment: rental.equipment().iter().map(EquipmentResponseDto::from).collect(),
            currency: rental.currency().into(),
            total_price: rental.total_price(),
        }
    }
}

impl From<Rental> for RentalResponseDto {
    fn from(rental: Rental) -> Self {
        Self::from(&rental)
    }
}
