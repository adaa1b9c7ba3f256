use crate::application::context::Context;
use crate::application::pipeline::Stage;
use crate::domain::money::round2;
use crate::domain::ports::RateProviderRef;
use crate::error::Result;

/// Converts the BTC amount into the base currency.
///
/// Sets `btc_price_in_base` and `subtotal_base = round2(price * amount)`.
/// An unsupported currency surfaces as the provider's transform error.
pub struct ConversionStage {
    rates: RateProviderRef,
}

impl ConversionStage {
    pub fn new(rates: RateProviderRef) -> Self {
        Self { rates }
    }
}

impl Stage for ConversionStage {
    fn name(&self) -> &'static str {
        "convert"
    }

    fn process(&self, ctx: &mut Context) -> Result<()> {
        let tx = &mut ctx.transaction;

        let price = self.rates.btc_price(tx.base_currency)?;
        tx.btc_price_in_base = Some(price);
        tx.subtotal_base = Some(round2(price * tx.btc_amount));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::Currency;
    use crate::domain::transaction::Transaction;
    use crate::error::PipelineError;
    use crate::infrastructure::rates::FixedRateProvider;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn stage() -> ConversionStage {
        ConversionStage::new(Arc::new(FixedRateProvider::new()))
    }

    #[test]
    fn test_sets_price_and_subtotal() {
        let mut ctx = Context::new(Transaction::new("u001", dec!(0.01), Currency::Usd));
        stage().process(&mut ctx).unwrap();
        assert_eq!(ctx.transaction.btc_price_in_base, Some(dec!(65000.0)));
        assert_eq!(ctx.transaction.subtotal_base, Some(dec!(650.00)));
    }

    #[test]
    fn test_subtotal_rounded_to_cents() {
        let mut ctx = Context::new(Transaction::new("u001", dec!(0.00123), Currency::Eur));
        stage().process(&mut ctx).unwrap();
        // 61000 * 0.00123 = 75.03
        assert_eq!(ctx.transaction.subtotal_base, Some(dec!(75.03)));
    }

    #[test]
    fn test_unsupported_currency_is_transform_error() {
        // Provider configured without GBP in its price table.
        let mut btc = HashMap::new();
        btc.insert(Currency::Usd, dec!(65000.0));
        let stage = ConversionStage::new(Arc::new(FixedRateProvider::with_tables(
            btc,
            HashMap::new(),
        )));

        let mut ctx = Context::new(Transaction::new("u001", dec!(0.01), Currency::Gbp));
        let err = stage.process(&mut ctx).unwrap_err();
        assert!(matches!(err, PipelineError::Transform(_)));
        assert!(ctx.transaction.btc_price_in_base.is_none());
    }
}
