//! Currency Rate Providers
//!
//! Implementations of the RateProvider gateway.

mod nbp;
mod static_rates;

pub use nbp::NbpRateProvider;
pub use static_rates::StaticRateProvider;
