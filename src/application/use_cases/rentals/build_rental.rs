//! Build Rental Use Case
//!
//! Turns a rental draft, which refers to car, client and equipment by ID, into
//! a rental entity. Car and equipment are resolved in full; the client is only
//! checked for existence and kept as a reference.

use std::sync::Arc;

use crate::application::use_cases::equipment::GetEquipmentByIdUseCase;
use crate::domain::gateways::{CarRepository, ClientRepository};
use crate::domain::models::{Rental, RentalDraft};
use crate::shared::errors::UseCaseError;

/// Use case for assembling a rental from references
pub struct BuildRentalUseCase {
    car_repository: Arc<dyn CarRepository>,
    client_repository: Arc<dyn ClientRepository>,
    get_equipment: Arc<GetEquipmentByIdUseCase>,
}

impl BuildRentalUseCase {
    /// Create a new BuildRentalUseCase
    #[must_use]
    pub fn new(
        car_repository: Arc<dyn CarRepository>,
        client_repository: Arc<dyn ClientRepository>,
        get_equipment: Arc<GetEquipmentByIdUseCase>,
    ) -> Self {
        Self {
            car_repository,
            client_repository,
            get_equipment,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the car, the client or any equipment doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, draft: RentalDraft) -> Result<Rental, UseCaseError> {
        tracing::debug!(car_id = %draft.car_id, client_id = %draft.client_id, "Building rental");

        let car = self.car_repository.find_by_id(draft.car_id).await?.ok_or_else(|| {
            tracing::warn!(car_id = %draft.car_id, "Car not found");
            UseCaseError::not_found("Car", draft.car_id)
        })?;

        if self.client_repository.find_by_id(draft.client_id).await?.is_none() {
            tracing::warn!(client_id = %draft.client_id, "Client not found");
            return Err(UseCaseError::not_found("Client", draft.client_id));
        }

        let mut builder = Rental::builder()
            .rent_date(draft.rent_date)
            .return_date(draft.return_date)
            .car(car)
            .client_id(draft.client_id)
            .currency(draft.currency);
        if let Some(id) = draft.id {
            builder = builder.id(id);
        }
        for equipment_id in draft.equipment_ids {
            builder = builder.equipment(self.get_equipment.execute(equipment_id).await?);
        }

        let mut rental = builder.build()?;
        if let Some(total_price) = draft.total_price {
            rental.override_total_price(total_price);
        }
        Ok(rental)
    }
}
