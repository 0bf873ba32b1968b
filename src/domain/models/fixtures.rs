//! Sample entities shared by unit tests

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::car::{Car, Gearbox};
use super::client::Client;
use super::equipment::Equipment;
use super::id::{CarId, ClientId, EquipmentId};
use super::rental::Rental;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Starting fee 30, 40 per day
pub fn kangoo() -> Car {
    Car::restore(
        CarId::new(1),
        "Kangoo".to_string(),
        "Renault".to_string(),
        "SL1111".to_string(),
        "1.4".to_string(),
        5,
        5,
        Gearbox::Manual,
        dec!(30),
        dec!(40),
    )
}

pub fn malkovich() -> Client {
    Client::restore(
        ClientId::new(1),
        "John".to_string(),
        "Malkovich".to_string(),
        "Katowice".to_string(),
        "jm@example.com".to_string(),
        "123456789".to_string(),
    )
}

pub fn baby_seat() -> Equipment {
    Equipment::restore(
        EquipmentId::new(1),
        "Baby seat".to_string(),
        "Seat for a baby".to_string(),
        dec!(10),
    )
}

pub fn trailer() -> Equipment {
    Equipment::restore(
        EquipmentId::new(2),
        "Trailer".to_string(),
        "Big trailer".to_string(),
        dec!(15),
    )
}

/// Kangoo rented by Malkovich, no equipment, priced in PLN
pub fn rental(rent_date: NaiveDate, return_date: NaiveDate) -> Rental {
    Rental::builder()
        .rent_date(rent_date)
        .return_date(return_date)
        .car(kangoo())
        .client(malkovich())
        .build()
        .expect("valid test rental")
}
