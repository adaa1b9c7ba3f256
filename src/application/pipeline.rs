//! Stage abstraction and the sequential pipeline runner.

use super::context::Context;
use crate::domain::transaction::Transaction;
use crate::error::{PipelineError, Result};
use log::{debug, warn};

/// One link in the pipeline.
///
/// A stage reads and mutates the [`Context`] in place, returning `Ok(())` to
/// hand it to the next stage or an error to halt the run. Stages never catch
/// each other's failures.
pub trait Stage: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    fn process(&self, ctx: &mut Context) -> Result<()>;
}

/// A failed run: the first stage error together with the context as it stood
/// when that stage raised. Partial mutations made by earlier stages are
/// visible and are not rolled back.
#[derive(Debug)]
pub struct FailedRun {
    pub error: PipelineError,
    pub context: Context,
}

/// A strict linear sequence of stages.
///
/// `run` applies each stage in configured order against one context and
/// short-circuits on the first failure. No branching, no retries, no
/// parallel stages.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Runs one transaction through every stage.
    ///
    /// Returns the final context on success, or a [`FailedRun`] carrying the
    /// first stage error and the partially mutated context.
    pub fn run(&self, transaction: Transaction) -> std::result::Result<Context, FailedRun> {
        let mut ctx = Context::new(transaction);

        for stage in &self.stages {
            match stage.process(&mut ctx) {
                Ok(()) => debug!("stage {} completed", stage.name()),
                Err(error) => {
                    warn!("stage {} failed: {}", stage.name(), error);
                    return Err(FailedRun {
                        error,
                        context: ctx,
                    });
                }
            }
        }

        Ok(ctx)
    }
}
