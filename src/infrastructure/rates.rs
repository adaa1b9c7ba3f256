use crate::domain::currency::Currency;
use crate::domain::ports::RateProvider;
use crate::error::{PipelineError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// A rate provider backed by static tables.
///
/// `new` seeds the tables every supported currency; `with_tables` accepts
/// arbitrary tables so callers can model a provider with narrower coverage.
pub struct FixedRateProvider {
    btc: HashMap<Currency, Decimal>,
    fx_usd: HashMap<Currency, Decimal>,
}

impl FixedRateProvider {
    pub fn new() -> Self {
        let btc = HashMap::from([
            (Currency::Usd, dec!(65000.0)),
            (Currency::Eur, dec!(61000.0)),
            (Currency::Gbp, dec!(53000.0)),
        ]);
        let fx_usd = HashMap::from([
            (Currency::Usd, dec!(1.0)),
            (Currency::Eur, dec!(0.93)),
            (Currency::Gbp, dec!(0.80)),
        ]);
        Self { btc, fx_usd }
    }

    pub fn with_tables(
        btc: HashMap<Currency, Decimal>,
        fx_usd: HashMap<Currency, Decimal>,
    ) -> Self {
        Self { btc, fx_usd }
    }
}

impl Default for FixedRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RateProvider for FixedRateProvider {
    fn btc_price(&self, currency: Currency) -> Result<Decimal> {
        self.btc.get(&currency).copied().ok_or_else(|| {
            PipelineError::Transform(format!("unsupported currency for BTC price: {currency}"))
        })
    }

    fn usd_to(&self, currency: Currency) -> Result<Decimal> {
        self.fx_usd.get(&currency).copied().ok_or_else(|| {
            PipelineError::Transform(format!("unsupported currency for FX: {currency}"))
        })
    }
}
