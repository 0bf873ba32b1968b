//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod equipment;
pub mod rentals;

#[cfg(test)]
pub(crate) mod test_support;

pub use equipment::GetEquipmentByIdUseCase;
pub use rentals::{
    AddEquipmentToRentalUseCase, BuildRentalUseCase, CalculateRentalPriceUseCase,
    DeleteRentalUseCase, GetRentalByIdUseCase, GetRentalsUseCase, RemoveEquipmentFromRentalUseCase,
    SaveRentalUseCase,
};
