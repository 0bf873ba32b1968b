//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod rental;

pub use rental::{
    CarResponseDto, ClientResponseDto, CurrencyDto, EquipmentResponseDto, RentalRequestDto,
    RentalResponseDto,
};
