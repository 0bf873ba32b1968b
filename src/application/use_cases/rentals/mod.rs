//! Rental Use Cases
//!
//! Rental lifecycle: reads, saves, deletes, equipment changes and pricing.

mod add_equipment_to_rental;
mod build_rental;
mod calculate_rental_price;
mod delete_rental;
mod get_rental_by_id;
mod get_rentals;
mod remove_equipment_from_rental;
mod save_rental;

pub use add_equipment_to_rental::AddEquipmentToRentalUseCase;
pub use build_rental::BuildRentalUseCase;
pub use calculate_rental_price::CalculateRentalPriceUseCase;
pub use delete_rental::DeleteRentalUseCase;
pub use get_rental_by_id::GetRentalByIdUseCase;
pub use get_rentals::GetRentalsUseCase;
pub use remove_equipment_from_rental::RemoveEquipmentFromRentalUseCase;
pub use save_rental::SaveRentalUseCase;
