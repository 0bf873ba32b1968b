//! Equipment Repository Gateway

use async_trait::async_trait;

use crate::domain::models::equipment::Equipment;
use crate::domain::models::id::EquipmentId;
use crate::shared::errors::RepositoryError;

/// Read access to the equipment catalogue
#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    /// Find an equipment item by its ID
    async fn find_by_id(&self, id: EquipmentId) -> Result<Option<Equipment>, RepositoryError>;
}
