use crate::application::context::Context;
use crate::application::pipeline::Stage;
use crate::domain::money::round2;
use crate::domain::ports::RateProviderRef;
use crate::error::{PipelineError, Result};

/// Converts the fixed USD commission into the base currency and computes
/// the final total.
///
/// Re-checks that the subtotal is present instead of trusting stage order.
pub struct FeeStage {
    rates: RateProviderRef,
}

impl FeeStage {
    pub fn new(rates: RateProviderRef) -> Self {
        Self { rates }
    }
}

impl Stage for FeeStage {
    fn name(&self) -> &'static str {
        "fee"
    }

    fn process(&self, ctx: &mut Context) -> Result<()> {
        let tx = &mut ctx.transaction;

        let subtotal = tx.subtotal_base.ok_or_else(|| {
            PipelineError::Transform(
                "missing subtotal_base; run the conversion stage first".into(),
            )
        })?;

        let fx = self.rates.usd_to(tx.base_currency)?;
        let commission = round2(tx.commission_usd * fx);
        tx.commission_base = Some(commission);
        tx.total_base = Some(round2(subtotal + commission));

        Ok(())
    }
}
