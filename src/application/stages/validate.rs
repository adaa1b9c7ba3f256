use crate::application::context::Context;
use crate::application::pipeline::Stage;
use crate::error::{PipelineError, Result};
use rust_decimal::Decimal;

/// Checks that the incoming request carries usable mandatory fields.
///
/// Currency membership is already enforced by the `Currency` type at the
/// parsing boundary, so only the user id and the amount are checked here.
/// The context is left untouched.
pub struct ValidationStage;

impl Stage for ValidationStage {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn process(&self, ctx: &mut Context) -> Result<()> {
        let tx = &ctx.transaction;

        if tx.user_id.trim().is_empty() {
            return Err(PipelineError::Validation(
                "user_id must be a non-empty string".into(),
            ));
        }
        if tx.btc_amount <= Decimal::ZERO {
            return Err(PipelineError::Validation(format!(
                "btc_amount must be > 0, got {}",
                tx.btc_amount
            )));
        }

        Ok(())
    }
}
