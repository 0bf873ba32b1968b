//! Hand-written repository doubles shared by the use case tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::gateways::{
    CarRepository, ClientRepository, EquipmentRepository, FetchPlan, RentalRepository,
};
use crate::domain::models::{Car, CarId, Client, ClientId, Equipment, EquipmentId, Rental, RentalId};
use crate::shared::errors::RepositoryError;

pub struct MockRentalRepository {
    find_by_id_result: Mutex<Option<Result<Option<Rental>, RepositoryError>>>,
    find_all_result: Mutex<Option<Result<Vec<Rental>, RepositoryError>>>,
    delete_result: Mutex<Option<Result<bool, RepositoryError>>>,
    saved: Mutex<Vec<Rental>>,
    plans: Mutex<Vec<FetchPlan>>,
}

impl MockRentalRepository {
    pub fn new() -> Self {
        Self {
            find_by_id_result: Mutex::new(None),
            find_all_result: Mutex::new(None),
            delete_result: Mutex::new(None),
            saved: Mutex::new(vec![]),
            plans: Mutex::new(vec![]),
        }
    }

    pub fn with_find_by_id(self, result: Result<Option<Rental>, RepositoryError>) -> Self {
        *self.find_by_id_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_find_all(self, result: Result<Vec<Rental>, RepositoryError>) -> Self {
        *self.find_all_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_delete(self, result: Result<bool, RepositoryError>) -> Self {
        *self.delete_result.lock().unwrap() = Some(result);
        self
    }

    /// Rentals passed to `save`, in call order
    pub fn saved(&self) -> Vec<Rental> {
        self.saved.lock().unwrap().clone()
    }

    /// Fetch plans requested by reads, in call order
    pub fn plans(&self) -> Vec<FetchPlan> {
        self.plans.lock().unwrap().clone()
    }
}

#[async_trait]
impl RentalRepository for MockRentalRepository {
    async fn find_by_id(&self, _id: RentalId, plan: FetchPlan) -> Result<Option<Rental>, RepositoryError> {
        self.plans.lock().unwrap().push(plan);
        self.find_by_id_result.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn find_all(&self, plan: FetchPlan) -> Result<Vec<Rental>, RepositoryError> {
        self.plans.lock().unwrap().push(plan);
        self.find_all_result.lock().unwrap().take().unwrap_or(Ok(vec![]))
    }

    async fn save(&self, rental: &Rental) -> Result<Rental, RepositoryError> {
        self.saved.lock().unwrap().push(rental.clone());
        let id = rental.id().unwrap_or(RentalId::new(1));
        Ok(rental.clone().with_id(id))
    }

    async fn delete_by_id(&self, _id: RentalId) -> Result<bool, RepositoryError> {
        self.delete_result.lock().unwrap().take().unwrap_or(Ok(false))
    }
}

/// Catalogue double backed by a fixed list
pub struct MockEquipmentRepository {
    items: Vec<Equipment>,
}

impl MockEquipmentRepository {
    pub fn new(items: Vec<Equipment>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl EquipmentRepository for MockEquipmentRepository {
    async fn find_by_id(&self, id: EquipmentId) -> Result<Option<Equipment>, RepositoryError> {
        Ok(self.items.iter().find(|e| e.id() == id).cloned())
    }
}

pub struct MockCarRepository {
    cars: Vec<Car>,
}

impl MockCarRepository {
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }
}

#[async_trait]
impl CarRepository for MockCarRepository {
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, RepositoryError> {
        Ok(self.cars.iter().find(|c| c.id() == id).cloned())
    }
}

pub struct MockClientRepository {
    clients: Vec<Client>,
}

impl MockClientRepository {
    pub fn new(clients: Vec<Client>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, RepositoryError> {
        Ok(self.clients.iter().find(|c| c.id() == id).cloned())
    }
}
