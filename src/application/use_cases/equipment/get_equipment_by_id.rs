//! Get Equipment By ID Use Case
//!
//! Resolves an equipment identifier to a catalogue entry.

use std::sync::Arc;

use crate::domain::gateways::EquipmentRepository;
use crate::domain::models::{Equipment, EquipmentId};
use crate::shared::errors::UseCaseError;

/// Use case for looking up a single equipment item
pub struct GetEquipmentByIdUseCase {
    equipment_repository: Arc<dyn EquipmentRepository>,
}

impl GetEquipmentByIdUseCase {
    /// Create a new GetEquipmentByIdUseCase
    #[must_use]
    pub fn new(equipment_repository: Arc<dyn EquipmentRepository>) -> Self {
        Self { equipment_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the equipment doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: EquipmentId) -> Result<Equipment, UseCaseError> {
        tracing::debug!(equipment_id = %id, "Getting equipment by ID");

        self.equipment_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(equipment_id = %id, "Equipment not found");
            UseCaseError::not_found("Equipment", id)
        })
    }
}
