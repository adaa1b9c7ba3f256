use crate::domain::currency::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Default commission, charged in USD regardless of the base currency.
pub const DEFAULT_COMMISSION_USD: Decimal = dec!(5.00);

/// One BTC purchase request and its computed financial breakdown.
///
/// The optional fields are populated strictly in pipeline order:
/// `btc_price_in_base` and `subtotal_base` by the conversion stage,
/// `commission_base` and `total_base` by the fee stage. The persist stage
/// rejects any record where one of the four is still unset.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub user_id: String,
    pub btc_amount: Decimal,
    pub base_currency: Currency,
    pub btc_price_in_base: Option<Decimal>,
    pub subtotal_base: Option<Decimal>,
    pub commission_usd: Decimal,
    pub commission_base: Option<Decimal>,
    pub total_base: Option<Decimal>,
    /// Creation time, epoch seconds. Captured fresh at each construction.
    pub ts_epoch: i64,
}

impl Transaction {
    /// Creates a new purchase request with the default commission and the
    /// current time as its creation timestamp.
    pub fn new(user_id: impl Into<String>, btc_amount: Decimal, base_currency: Currency) -> Self {
        Self {
            user_id: user_id.into(),
            btc_amount,
            base_currency,
            btc_price_in_base: None,
            subtotal_base: None,
            commission_usd: DEFAULT_COMMISSION_USD,
            commission_base: None,
            total_base: None,
            ts_epoch: now_epoch(),
        }
    }

    /// Whether every computed field has been populated.
    pub fn is_complete(&self) -> bool {
        self.btc_price_in_base.is_some()
            && self.subtotal_base.is_some()
            && self.commission_base.is_some()
            && self.total_base.is_some()
    }
}

fn now_epoch() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
