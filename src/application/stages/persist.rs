use crate::application::context::Context;
use crate::application::pipeline::Stage;
use crate::domain::ports::TransactionSinkRef;
use crate::error::{PipelineError, Result};
use log::debug;

/// Appends the fully computed transaction to the durable sink.
///
/// Rejects records with any computed field still unset. On success the
/// sink-assigned id is recorded in the context.
pub struct PersistStage {
    sink: TransactionSinkRef,
}

impl PersistStage {
    pub fn new(sink: TransactionSinkRef) -> Self {
        Self { sink }
    }
}

impl Stage for PersistStage {
    fn name(&self) -> &'static str {
        "persist"
    }

    fn process(&self, ctx: &mut Context) -> Result<()> {
        if !ctx.transaction.is_complete() {
            return Err(PipelineError::Storage(
                "incomplete transaction; a prior stage did not run".into(),
            ));
        }

        let id = self.sink.append(&ctx.transaction)?;
        debug!("persisted transaction for {} as record {id}", ctx.transaction.user_id);
        ctx.stored_id = Some(id);
        Ok(())
    }
}
