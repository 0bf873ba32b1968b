//! Rental Repository Gateway
//!
//! Abstract trait defining the contract for rental persistence operations.

use async_trait::async_trait;

use crate::domain::models::rental::Rental;
use crate::domain::models::id::RentalId;
use crate::shared::errors::RepositoryError;

/// How an association is loaded alongside a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fetch {
    Eager,
    #[default]
    Lazy,
}

/// Loading policy for rental reads.
///
/// Car and equipment are always loaded with the rental. The client is only
/// loaded when `client` is `Fetch::Eager`; otherwise the rental carries its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchPlan {
    pub client: Fetch,
}

impl FetchPlan {
    /// Load every association
    #[must_use]
    pub fn eager() -> Self {
        Self { client: Fetch::Eager }
    }

    /// Leave the client as a bare reference
    #[must_use]
    pub fn lazy_client() -> Self {
        Self { client: Fetch::Lazy }
    }
}

/// Repository trait for Rental persistence operations
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Find a rental by its ID
    async fn find_by_id(&self, id: RentalId, plan: FetchPlan) -> Result<Option<Rental>, RepositoryError>;

    /// Find all rentals, ordered by ID
    async fn find_all(&self, plan: FetchPlan) -> Result<Vec<Rental>, RepositoryError>;

    /// Insert a rental without an ID, or insert-or-update one that has an ID.
    /// The equipment list is stored in order.
    async fn save(&self, rental: &Rental) -> Result<Rental, RepositoryError>;

    /// Delete a rental, returning whether a row was removed
    async fn delete_by_id(&self, id: RentalId) -> Result<bool, RepositoryError>;
}
