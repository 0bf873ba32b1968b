//! Rental Handlers
//!
//! HTTP handlers for the `/v1/rents` resource.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::{EquipmentId, RentalId};
use crate::infrastructure::driving_adapters::api_rest::dto::rental::{
    RentalRequestDto, RentalResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for rental endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_rentals).post(create_rental).put(upsert_rental))
        .route("/{id}", get(get_rental_by_id).delete(delete_rental))
        .route("/{rent_id}/addEquipment/{equipment_id}", put(add_equipment))
        .route("/{rent_id}/removeEquipment/{equipment_id}", put(remove_equipment))
        .route("/{rent_id}/calculatePrice", put(calculate_price))
}

/// GET /v1/rents/{id} - Get a rental with its client loaded
///
/// # Responses
///
/// * 200 OK - Rental found
/// * 404 Not Found - Rental does not exist
#[axum::debug_handler]
async fn get_rental_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RentalResponseDto>, ApiError> {
    let rental = state.get_rental_by_id_use_case.execute(RentalId::new(id)).await?;
    Ok(Json(RentalResponseDto::from(rental)))
}

/// GET /v1/rents - List all rentals
///
/// Clients are not loaded; each entry carries `clientId` only.
#[axum::debug_handler]
async fn get_rentals(State(state): State<AppState>) -> Result<Json<Vec<RentalResponseDto>>, ApiError> {
    let rentals = state.get_rentals_use_case.execute().await?;
    Ok(Json(rentals.into_iter().map(RentalResponseDto::from).collect()))
}

/// POST /v1/rents - Create a rental
///
/// # Responses
///
/// * 201 Created - Rental stored
/// * 400 Bad Request - Validation error
/// * 404 Not Found - Referenced car, client or equipment does not exist
#[axum::debug_handler]
async fn create_rental(
    State(state): State<AppState>,
    Json(dto): Json<RentalRequestDto>,
) -> Result<StatusCode, ApiError> {
    store(&state, dto).await?;
    Ok(StatusCode::CREATED)
}

/// PUT /v1/rents - Create or replace a rental by the id in the body
///
/// # Responses
///
/// * 204 No Content - Rental stored
/// * 400 Bad Request - Validation error
/// * 404 Not Found - Referenced car, client or equipment does not exist
#[axum::debug_handler]
async fn upsert_rental(
    State(state): State<AppState>,
    Json(dto): Json<RentalRequestDto>,
) -> Result<StatusCode, ApiError> {
    store(&state, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn store(state: &AppState, dto: RentalRequestDto) -> Result<(), ApiError> {
    dto.validate()?;

    let rental = state.build_rental_use_case.execute(dto.into()).await?;
    state.save_rental_use_case.execute(rental).await?;
    Ok(())
}

/// DELETE /v1/rents/{id} - Delete a rental
///
/// Deleting a rental that does not exist also answers 204.
#[axum::debug_handler]
async fn delete_rental(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.delete_rental_use_case.execute(RentalId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /v1/rents/{rent_id}/addEquipment/{equipment_id}
///
/// # Responses
///
/// * 200 OK - Updated rental
/// * 404 Not Found - Rental or equipment does not exist
#[axum::debug_handler]
async fn add_equipment(
    State(state): State<AppState>,
    Path((rent_id, equipment_id)): Path<(i64, i64)>,
) -> Result<Json<RentalResponseDto>, ApiError> {
    let rental = state
        .add_equipment_use_case
        .execute(RentalId::new(rent_id), EquipmentId::new(equipment_id))
        .await?;
    Ok(Json(RentalResponseDto::from(rental)))
}

/// PUT /v1/rents/{rent_id}/removeEquipment/{equipment_id}
///
/// Equipment not attached to the rental leaves it unchanged.
#[axum::debug_handler]
async fn remove_equipment(
    State(state): State<AppState>,
    Path((rent_id, equipment_id)): Path<(i64, i64)>,
) -> Result<Json<RentalResponseDto>, ApiError> {
    let rental = state
        .remove_equipment_use_case
        .execute(RentalId::new(rent_id), EquipmentId::new(equipment_id))
        .await?;
    Ok(Json(RentalResponseDto::from(rental)))
}

/// PUT /v1/rents/{rent_id}/calculatePrice
///
/// # Responses
///
/// * 200 OK - Rental with its stored total price
/// * 400 Bad Request - Return date precedes rent date
/// * 404 Not Found - Rental does not exist
/// * 502 Bad Gateway - Exchange rates unavailable
#[axum::debug_handler]
async fn calculate_price(
    State(state): State<AppState>,
    Path(rent_id): Path<i64>,
) -> Result<Json<RentalResponseDto>, ApiError> {
    let rental = state
        .calculate_rental_price_use_case
        .execute(RentalId::new(rent_id))
        .await?;
    Ok(Json(RentalResponseDto::from(rental)))
}
