//! Client Domain Model

use super::id::ClientId;

/// Client domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    first_name: String,
    last_name: String,
    address: String,
    email: String,
    phone: String,
}

impl Client {
    /// Restore a Client from persisted data
    #[must_use]
    pub fn restore(
        id: ClientId,
        first_name: String,
        last_name: String,
        address: String,
        email: String,
        phone: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            address,
            email,
            phone,
        }
    }

    #[must_use]
    pub fn id(&self) -> ClientId {
        self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// A rental's link to its client, loaded or not depending on the fetch plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientRef {
    Loaded(Client),
    Unloaded(ClientId),
}

impl ClientRef {
    #[must_use]
    pub fn id(&self) -> ClientId {
        match self {
            Self::Loaded(client) => client.id(),
            Self::Unloaded(id) => *id,
        }
    }

    /// The client, if it was loaded with the rental
    #[must_use]
    pub fn loaded(&self) -> Option<&Client> {
        match self {
            Self::Loaded(client) => Some(client),
            Self::Unloaded(_) => None,
        }
    }
}

impl From<Client> for ClientRef {
    fn from(client: Client) -> Self {
        Self::Loaded(client)
    }
}

impl From<ClientId> for ClientRef {
    fn from(id: ClientId) -> Self {
        Self::Unloaded(id)
    }
}
