//! National Bank of Poland Rate Provider
//!
//! Reads average rates from NBP table A. A table entry gives the PLN price of
//! one unit of foreign currency (`mid`), so the PLN to X multiplier is `1 / mid`.

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::gateways::RateProvider;
use crate::domain::models::{Currency, Rate};
use crate::shared::errors::RateError;

/// Decimal places kept on fetched multipliers
const RATE_SCALE: u32 = 6;

#[derive(Debug, Deserialize)]
struct NbpRateTable {
    rates: Vec<NbpRate>,
}

#[derive(Debug, Deserialize)]
struct NbpRate {
    #[serde(with = "rust_decimal::serde::float")]
    mid: Decimal,
}

/// HTTP client for `GET {base_url}/api/exchangerates/rates/a/{code}/`
pub struct NbpRateProvider {
    client: reqwest::Client,
    base_url: String,
}

impl NbpRateProvider {
    /// Create a provider against `base_url` (e.g. `https://api.nbp.pl`)
    ///
    /// # Errors
    ///
    /// Returns `RateError::Http` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn pln_multiplier(&self, currency: Currency) -> Result<Decimal, RateError> {
        let code = currency.code();
        let url = format!(
            "{}/api/exchangerates/rates/a/{}/",
            self.base_url,
            code.to_lowercase()
        );
        tracing::debug!(%url, "Fetching NBP rate");

        let table: NbpRateTable = self
            .client
            .get(&url)
            .query(&[("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mid = table
            .rates
            .first()
            .map(|rate| rate.mid)
            .ok_or_else(|| RateError::MissingRate(code.to_string()))?;
        if mid <= Decimal::ZERO {
            return Err(RateError::InvalidRate {
                currency: code.to_string(),
                reason: format!("non-positive mid rate {mid}"),
            });
        }

        Ok((Decimal::ONE / mid).round_dp(RATE_SCALE))
    }
}

#[async_trait]
impl RateProvider for NbpRateProvider {
    async fn fetch_rates(&self) -> Result<Rate, RateError> {
        let (pln_usd, pln_eur) = tokio::try_join!(
            self.pln_multiplier(Currency::Usd),
            self.pln_multiplier(Currency::Eur)
        )?;

        tracing::info!(%pln_usd, %pln_eur, "Fetched NBP rates");
        Ok(Rate::new(pln_usd, pln_eur))
    }
}
