//! PostgreSQL Car Repository Implementation

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::CarRepository;
use crate::domain::models::{Car, CarId, Gearbox};
use crate::shared::errors::RepositoryError;

/// Database row representation for cars table
#[derive(Debug, sqlx::FromRow)]
pub(super) struct CarRow {
    pub id: i64,
    pub model: String,
    pub make: String,
    pub registration_number: String,
    pub engine: String,
    pub seats: i32,
    pub doors: i32,
    pub gearbox: String,
    pub starting_price: Decimal,
    pub price_per_day: Decimal,
}

impl TryFrom<CarRow> for Car {
    type Error = RepositoryError;

    fn try_from(row: CarRow) -> Result<Self, Self::Error> {
        let gearbox: Gearbox = row
            .gearbox
            .parse()
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse gearbox: {}", e)))?;

        Ok(Car::restore(
            CarId::new(row.id),
            row.model,
            row.make,
            row.registration_number,
            row.engine,
            row.seats,
            row.doors,
            gearbox,
            row.starting_price,
            row.price_per_day,
        ))
    }
}

/// PostgreSQL implementation of CarRepository
pub struct PostgresCarRepository {
    pool: PgPool,
}

impl PostgresCarRepository {
    /// Create a new PostgresCarRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PostgresCarRepository {
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, RepositoryError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, model, make, registration_number, engine, seats, doors,
                   gearbox, starting_price, price_per_day
            FROM cars
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Car::try_from).transpose()
    }
}
