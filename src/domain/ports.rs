use super::currency::Currency;
use super::transaction::Transaction;
use super::user::User;
use crate::error::Result;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Supplies exchange-rate data for a given currency.
///
/// Pure lookup, no side effects. Both operations fail with a
/// [`Transform`](crate::error::PipelineError::Transform) error when the
/// currency is absent from the provider's table.
pub trait RateProvider: Send + Sync {
    /// Price of one BTC expressed in `currency`.
    fn btc_price(&self, currency: Currency) -> Result<Decimal>;

    /// Conversion factor from USD into `currency`.
    fn usd_to(&self, currency: Currency) -> Result<Decimal>;
}

/// Resolves a user identifier to a user record. No side effects.
pub trait UserDirectory: Send + Sync {
    fn lookup(&self, user_id: &str) -> Option<User>;
}

/// Durable append-only store for fully computed transactions.
///
/// Every call appends a new record; there is no deduplication. The assigned
/// id is monotonically increasing starting at 1, and the record is committed
/// before `append` returns. Implementations must be safe under concurrent
/// invocation.
pub trait TransactionSink: Send + Sync {
    fn append(&self, tx: &Transaction) -> Result<u64>;
}

/// Shared handle to a rate provider; the provider is read-only and serves
/// two stages at once.
pub type RateProviderRef = Arc<dyn RateProvider>;
/// Shared handle to a user directory.
pub type UserDirectoryRef = Arc<dyn UserDirectory>;
/// Shared handle to a transaction sink.
pub type TransactionSinkRef = Arc<dyn TransactionSink>;
