//! Client Repository Gateway

use async_trait::async_trait;

use crate::domain::models::client::Client;
use crate::domain::models::id::ClientId;
use crate::shared::errors::RepositoryError;

/// Read access to registered clients
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find a client by its ID
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, RepositoryError>;
}
