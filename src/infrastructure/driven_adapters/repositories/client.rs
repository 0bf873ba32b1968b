//! PostgreSQL Client Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::ClientRepository;
use crate::domain::models::{Client, ClientId};
use crate::shared::errors::RepositoryError;

/// Database row representation for clients table
#[derive(Debug, sqlx::FromRow)]
pub(super) struct ClientRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Client::restore(
            ClientId::new(row.id),
            row.first_name,
            row.last_name,
            row.address,
            row.email,
            row.phone,
        )
    }
}

pub(super) const CLIENT_COLUMNS: &str = "id, first_name, last_name, address, email, phone";

/// PostgreSQL implementation of ClientRepository
pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    /// Create a new PostgresClientRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, RepositoryError> {
        let query = format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1");
        let row = sqlx::query_as::<_, ClientRow>(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Client::from))
    }
}
