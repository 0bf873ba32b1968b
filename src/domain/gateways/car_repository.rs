//! Car Repository Gateway

use async_trait::async_trait;

use crate::domain::models::car::Car;
use crate::domain::models::id::CarId;
use crate::shared::errors::RepositoryError;

/// Read access to the fleet
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Find a car by its ID
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, RepositoryError>;
}
