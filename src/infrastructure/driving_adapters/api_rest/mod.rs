//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    AddEquipmentToRentalUseCase, BuildRentalUseCase, CalculateRentalPriceUseCase,
    DeleteRentalUseCase, GetEquipmentByIdUseCase, GetRentalByIdUseCase, GetRentalsUseCase,
    RemoveEquipmentFromRentalUseCase, SaveRentalUseCase,
};
use crate::domain::gateways::{
    CarRepository, ClientRepository, EquipmentRepository, RateProvider, RentalRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub build_rental_use_case: Arc<BuildRentalUseCase>,
    pub get_rental_by_id_use_case: Arc<GetRentalByIdUseCase>,
    pub get_rentals_use_case: Arc<GetRentalsUseCase>,
    pub save_rental_use_case: Arc<SaveRentalUseCase>,
    pub delete_rental_use_case: Arc<DeleteRentalUseCase>,
    pub add_equipment_use_case: Arc<AddEquipmentToRentalUseCase>,
    pub remove_equipment_use_case: Arc<RemoveEquipmentFromRentalUseCase>,
    pub calculate_rental_price_use_case: Arc<CalculateRentalPriceUseCase>,
}

/// Driven adapters the use cases are wired onto
pub struct Gateways {
    pub rentals: Arc<dyn RentalRepository>,
    pub cars: Arc<dyn CarRepository>,
    pub clients: Arc<dyn ClientRepository>,
    pub equipment: Arc<dyn EquipmentRepository>,
    pub rates: Arc<dyn RateProvider>,
}

impl AppState {
    /// Create every use case over the given gateways
    #[must_use]
    pub fn new(gateways: Gateways) -> Self {
        let Gateways {
            rentals,
            cars,
            clients,
            equipment,
            rates,
        } = gateways;

        let get_equipment = Arc::new(GetEquipmentByIdUseCase::new(equipment));

        Self {
            build_rental_use_case: Arc::new(BuildRentalUseCase::new(cars, clients, get_equipment.clone())),
            get_rental_by_id_use_case: Arc::new(GetRentalByIdUseCase::new(rentals.clone())),
            get_rentals_use_case: Arc::new(GetRentalsUseCase::new(rentals.clone())),
            save_rental_use_case: Arc::new(SaveRentalUseCase::new(rentals.clone())),
            delete_rental_use_case: Arc::new(DeleteRentalUseCase::new(rentals.clone())),
            add_equipment_use_case: Arc::new(AddEquipmentToRentalUseCase::new(
                rentals.clone(),
                get_equipment.clone(),
            )),
            remove_equipment_use_case: Arc::new(RemoveEquipmentFromRentalUseCase::new(
                rentals.clone(),
                get_equipment,
            )),
            calculate_rental_price_use_case: Arc::new(CalculateRentalPriceUseCase::new(rentals, rates)),
        }
    }
}

/// Build the HTTP application with its middleware stack
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/v1/rents", handlers::rentals::router())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
