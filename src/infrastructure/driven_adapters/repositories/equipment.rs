//! PostgreSQL Equipment Repository Implementation

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::EquipmentRepository;
use crate::domain::models::{Equipment, EquipmentId};
use crate::shared::errors::RepositoryError;

/// Database row representation for equipment table
#[derive(Debug, sqlx::FromRow)]
pub(super) struct EquipmentRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price_per_day: Decimal,
}

impl From<EquipmentRow> for Equipment {
    fn from(row: EquipmentRow) -> Self {
        Equipment::restore(EquipmentId::new(row.id), row.name, row.description, row.price_per_day)
    }
}

/// PostgreSQL implementation of EquipmentRepository
pub struct PostgresEquipmentRepository {
    pool: PgPool,
}

impl PostgresEquipmentRepository {
    /// Create a new PostgresEquipmentRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EquipmentRepository for PostgresEquipmentRepository {
    async fn find_by_id(&self, id: EquipmentId) -> Result<Option<Equipment>, RepositoryError> {
        let row = sqlx::query_as::<_, EquipmentRow>(
            r#"
            SELECT id, name, description, price_per_day
            FROM equipment
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Equipment::from))
    }
}
