//! PostgreSQL Rental Repository Implementation
//!
//! Implements the RentalRepository trait using SQLx for PostgreSQL.
//! Rentals live in `rents`; their ordered equipment list lives in
//! `rent_equipment`, keyed by position.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::car::CarRow;
use super::client::{ClientRow, CLIENT_COLUMNS};
use super::equipment::EquipmentRow;
use crate::domain::gateways::{Fetch, FetchPlan, RentalRepository};
use crate::domain::models::{Car, Client, ClientId, Currency, Equipment, Rental, RentalId};
use crate::shared::errors::RepositoryError;

/// Rental columns joined with the columns of its car
const RENTAL_SELECT: &str = r#"
    SELECT r.id AS rent_id, r.rent_date, r.return_date, r.client_id, r.currency, r.total_price,
           c.id, c.model, c.make, c.registration_number, c.engine, c.seats, c.doors,
           c.gearbox, c.starting_price, c.price_per_day
    FROM rents r
    JOIN cars c ON c.id = r.car_id
"#;

/// Database row representation for a rental joined with its car
#[derive(Debug, sqlx::FromRow)]
struct RentalRow {
    rent_id: i64,
    rent_date: NaiveDate,
    return_date: NaiveDate,
    client_id: i64,
    currency: String,
    total_price: Option<Decimal>,
    #[sqlx(flatten)]
    car: CarRow,
}

/// An equipment item attached to a rental
#[derive(Debug, sqlx::FromRow)]
struct RentEquipmentRow {
    rent_id: i64,
    #[sqlx(flatten)]
    equipment: EquipmentRow,
}

impl RentalRow {
    fn into_rental(
        self,
        equipment: Vec<Equipment>,
        client: Option<&Client>,
    ) -> Result<Rental, RepositoryError> {
        let currency: Currency = self
            .currency
            .parse()
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse currency: {}", e)))?;

        let mut builder = Rental::builder()
            .id(RentalId::new(self.rent_id))
            .rent_date(self.rent_date)
            .return_date(self.return_date)
            .car(Car::try_from(self.car)?)
            .currency(currency);
        builder = match client {
            Some(client) => builder.client(client.clone()),
            None => builder.client_id(ClientId::new(self.client_id)),
        };
        if let Some(total_price) = self.total_price {
            builder = builder.total_price(total_price);
        }
        builder = equipment.into_iter().fold(builder, |b, e| b.equipment(e));

        builder
            .build()
            .map_err(|e| RepositoryError::Mapping(format!("Failed to build rental: {}", e)))
    }
}

/// PostgreSQL implementation of RentalRepository
pub struct PostgresRentalRepository {
    pool: PgPool,
}

impl PostgresRentalRepository {
    /// Create a new PostgresRentalRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load equipment lists for the given rentals, in stored order
    async fn equipment_for(&self, rent_ids: &[i64]) -> Result<HashMap<i64, Vec<Equipment>>, RepositoryError> {
        let rows = sqlx::query_as::<_, RentEquipmentRow>(
            r#"
            SELECT re.rent_id, e.id, e.name, e.description, e.price_per_day
            FROM rent_equipment re
            JOIN equipment e ON e.id = re.equipment_id
            WHERE re.rent_id = ANY($1)
            ORDER BY re.rent_id, re.position
            "#,
        )
        .bind(rent_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_rental: HashMap<i64, Vec<Equipment>> = HashMap::new();
        for row in rows {
            by_rental.entry(row.rent_id).or_default().push(row.equipment.into());
        }
        Ok(by_rental)
    }

    async fn clients_for(&self, client_ids: &[i64]) -> Result<HashMap<i64, Client>, RepositoryError> {
        let query = format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, ClientRow>(&query)
            .bind(client_ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|row| (row.id, Client::from(row))).collect())
    }

    /// Attach equipment, and the client when the plan asks for it
    async fn assemble(&self, rows: Vec<RentalRow>, plan: FetchPlan) -> Result<Vec<Rental>, RepositoryError> {
        if rows.is_empty() {
            return Ok(vec![]);
        }

        let rent_ids: Vec<i64> = rows.iter().map(|row| row.rent_id).collect();
        let mut equipment = self.equipment_for(&rent_ids).await?;

        let clients = match plan.client {
            Fetch::Eager => {
                let client_ids: Vec<i64> = rows.iter().map(|row| row.client_id).collect();
                self.clients_for(&client_ids).await?
            }
            Fetch::Lazy => HashMap::new(),
        };

        rows.into_iter()
            .map(|row| {
                let items = equipment.remove(&row.rent_id).unwrap_or_default();
                let client = clients.get(&row.client_id);
                row.into_rental(items, client)
            })
            .collect()
    }
}

#[async_trait]
impl RentalRepository for PostgresRentalRepository {
    async fn find_by_id(&self, id: RentalId, plan: FetchPlan) -> Result<Option<Rental>, RepositoryError> {
        let query = format!("{RENTAL_SELECT} WHERE r.id = $1");
        let row = sqlx::query_as::<_, RentalRow>(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        Ok(self.assemble(vec![row], plan).await?.pop())
    }

    async fn find_all(&self, plan: FetchPlan) -> Result<Vec<Rental>, RepositoryError> {
        let query = format!("{RENTAL_SELECT} ORDER BY r.id ASC");
        let rows = sqlx::query_as::<_, RentalRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        self.assemble(rows, plan).await
    }

    async fn save(&self, rental: &Rental) -> Result<Rental, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = match rental.id() {
            None => {
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO rents (rent_date, return_date, car_id, client_id, currency, total_price)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING id
                    "#,
                )
                .bind(rental.rent_date())
                .bind(rental.return_date())
                .bind(rental.car().id().value())
                .bind(rental.client().id().value())
                .bind(rental.currency().code())
                .bind(rental.total_price())
                .fetch_one(&mut *tx)
                .await?
            }
            Some(id) => {
                let id = sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO rents (id, rent_date, return_date, car_id, client_id, currency, total_price)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    ON CONFLICT (id) DO UPDATE
                    SET rent_date = EXCLUDED.rent_date,
                        return_date = EXCLUDED.return_date,
                        car_id = EXCLUDED.car_id,
                        client_id = EXCLUDED.client_id,
                        currency = EXCLUDED.currency,
                        total_price = EXCLUDED.total_price
                    RETURNING id
                    "#,
                )
                .bind(id.value())
                .bind(rental.rent_date())
                .bind(rental.return_date())
                .bind(rental.car().id().value())
                .bind(rental.client().id().value())
                .bind(rental.currency().code())
                .bind(rental.total_price())
                .fetch_one(&mut *tx)
                .await?;

                // A caller-chosen id must not be handed out again by the identity sequence
                sqlx::query(
                    "SELECT setval(pg_get_serial_sequence('rents', 'id'), (SELECT MAX(id) FROM rents))",
                )
                .execute(&mut *tx)
                .await?;

                id
            }
        };

        sqlx::query("DELETE FROM rent_equipment WHERE rent_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for (position, equipment) in rental.equipment().iter().enumerate() {
            let position = i32::try_from(position)
                .map_err(|_| RepositoryError::Mapping("Equipment list too long".to_string()))?;
            sqlx::query(
                r#"
                INSERT INTO rent_equipment (rent_id, position, equipment_id)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(id)
            .bind(position)
            .bind(equipment.id().value())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(rental.clone().with_id(RentalId::new(id)))
    }

    async fn delete_by_id(&self, id: RentalId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM rents WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
