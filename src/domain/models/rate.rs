//! Currency and Rate Value Objects

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Currency a rental is priced in. PLN is the base currency of all stored prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    Pln,
    Usd,
    Eur,
}

impl Currency {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Pln => "PLN",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLN" => Ok(Self::Pln),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            other => Err(format!("unsupported currency '{other}'")),
        }
    }
}

/// PLN conversion multipliers taken at calculation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rate {
    pln_usd: Decimal,
    pln_eur: Decimal,
}

impl Rate {
    #[must_use]
    pub fn new(pln_usd: Decimal, pln_eur: Decimal) -> Self {
        Self { pln_usd, pln_eur }
    }

    #[must_use]
    pub fn pln_usd(&self) -> Decimal {
        self.pln_usd
    }

    #[must_use]
    pub fn pln_eur(&self) -> Decimal {
        self.pln_eur
    }

    /// Multiplier converting a PLN amount into `currency`
    #[must_use]
    pub fn multiplier(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Pln => Decimal::ONE,
            Currency::Usd => self.pln_usd,
            Currency::Eur => self.pln_eur,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_multiplier_selects_exactly_one_rate() {
        let rate = Rate::new(dec!(0.25), dec!(0.2));
        assert_eq!(rate.multiplier(Currency::Pln), Decimal::ONE);
        assert_eq!(rate.multiplier(Currency::Usd), dec!(0.25));
        assert_eq!(rate.multiplier(Currency::Eur), dec!(0.2));
    }

    #[test]
    fn test_currency_codes() {
        for currency in [Currency::Pln, Currency::Usd, Currency::Eur] {
            assert_eq!(currency.code().parse::<Currency>(), Ok(currency));
        }
        assert!("GBP".parse::<Currency>().is_err());
        assert_eq!(Currency::default(), Currency::Pln);
    }
}
