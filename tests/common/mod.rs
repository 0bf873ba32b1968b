//! Common test utilities for integration tests
//!
//! Provides a PostgreSQL-backed test application on testcontainers,
//! seeding helpers for reference data and request/response helpers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use car_rental::infrastructure::driven_adapters::config::AppConfig;
use car_rental::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use car_rental::infrastructure::driven_adapters::{
    PostgresCarRepository, PostgresClientRepository, PostgresEquipmentRepository,
    PostgresRentalRepository, StaticRateProvider,
};
use car_rental::infrastructure::driving_adapters::api_rest::{self, AppState, Gateways};

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    ///
    /// Static rates: 1 PLN = 0.25 USD = 0.20 EUR.
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let config = test_config(&format!("postgres://postgres:postgres@{}:{}/postgres", host, port));

        let pool = create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(&pool).await.expect("Failed to run migrations");

        let gateways = Gateways {
            rentals: Arc::new(PostgresRentalRepository::new(pool.clone())),
            cars: Arc::new(PostgresCarRepository::new(pool.clone())),
            clients: Arc::new(PostgresClientRepository::new(pool.clone())),
            equipment: Arc::new(PostgresEquipmentRepository::new(pool.clone())),
            rates: Arc::new(StaticRateProvider::new(config.rates.pln_usd, config.rates.pln_eur)),
        };
        let router = api_rest::app(AppState::new(gateways));

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Insert a car priced at `starting_price` plus `price_per_day`
    pub async fn seed_car(&self, registration_number: &str, starting_price: Decimal, price_per_day: Decimal) -> i64 {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO cars (model, make, registration_number, engine, seats, doors, gearbox,
                              starting_price, price_per_day)
            VALUES ('Kangoo', 'Renault', $1, '1.4', 5, 5, 'MANUAL', $2, $3)
            RETURNING id
            "#,
        )
        .bind(registration_number)
        .bind(starting_price)
        .bind(price_per_day)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to seed car")
    }

    pub async fn seed_client(&self, last_name: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO clients (first_name, last_name, address, email, phone)
            VALUES ('John', $1, 'Katowice', 'jm@example.com', '123456789')
            RETURNING id
            "#,
        )
        .bind(last_name)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to seed client")
    }

    pub async fn seed_equipment(&self, name: &str, price_per_day: Decimal) -> i64 {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO equipment (name, description, price_per_day)
            VALUES ($1, 'Test equipment', $2)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(price_per_day)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to seed equipment")
    }
}

/// Create a test configuration
pub fn test_config(database_url: &str) -> AppConfig {
    use config::{Config, File, FileFormat};

    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[database]
url = "{}"
max_connections = 5
min_connections = 1

[rates]
provider = "static"
pln_usd = "0.25"
pln_eur = "0.20"
nbp_base_url = "http://localhost"
timeout_secs = 1
"#,
        database_url
    );

    Config::builder()
        .add_source(File::from_str(&config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}

/// Send a request, with a JSON body when given, and return status plus raw body
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json)),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

/// Helper struct for rental request bodies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub rent_date: NaiveDate,
    pub return_date: NaiveDate,
    pub car_id: i64,
    pub client_id: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub equipment_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
}

impl RentalRequest {
    /// Five-day rental from 2021-01-01 to 2021-01-05
    pub fn new(car_id: i64, client_id: i64) -> Self {
        Self {
            id: None,
            rent_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2021, 1, 5).unwrap(),
            car_id,
            client_id,
            equipment_ids: vec![],
            currency: None,
            total_price: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_equipment(mut self, equipment_ids: Vec<i64>) -> Self {
        self.equipment_ids = equipment_ids;
        self
    }

    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = Some(currency.to_string());
        self
    }

    pub fn with_dates(mut self, rent_date: NaiveDate, return_date: NaiveDate) -> Self {
        self.rent_date = rent_date;
        self.return_date = return_date;
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

/// Rental response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: i64,
    pub rent_date: NaiveDate,
    pub return_date: NaiveDate,
    pub number_of_days: i64,
    pub car: CarResponse,
    pub client_id: i64,
    pub client: Option<ClientResponse>,
    pub equipment: Vec<EquipmentResponse>,
    pub currency: String,
    pub total_price: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: i64,
    pub registration_number: String,
    pub gearbox: String,
    pub starting_price: Decimal,
    pub price_per_day: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentResponse {
    pub id: i64,
    pub name: String,
    pub price_per_day: Decimal,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
