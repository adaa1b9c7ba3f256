use crate::domain::currency::Currency;
use crate::domain::transaction::Transaction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One durable row: the sink-assigned id plus the transaction fields.
///
/// The price/subtotal/commission/total columns are nullable in the store
/// format even though the persist stage only ever appends complete records.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct StoredRecord {
    pub id: u64,
    pub user_id: String,
    pub btc_amount: Decimal,
    pub base_currency: Currency,
    pub btc_price_in_base: Option<Decimal>,
    pub subtotal_base: Option<Decimal>,
    pub commission_usd: Decimal,
    pub commission_base: Option<Decimal>,
    pub total_base: Option<Decimal>,
    pub ts_epoch: i64,
}

impl StoredRecord {
    pub fn from_transaction(id: u64, tx: &Transaction) -> Self {
        Self {
            id,
            user_id: tx.user_id.clone(),
            btc_amount: tx.btc_amount,
            base_currency: tx.base_currency,
            btc_price_in_base: tx.btc_price_in_base,
            subtotal_base: tx.subtotal_base,
            commission_usd: tx.commission_usd,
            commission_base: tx.commission_base,
            total_base: tx.total_base,
            ts_epoch: tx.ts_epoch,
        }
    }
}
