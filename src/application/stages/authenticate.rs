use crate::application::context::Context;
use crate::application::pipeline::Stage;
use crate::domain::ports::UserDirectoryRef;
use crate::error::{PipelineError, Result};

/// Resolves the requesting user against the directory and attaches the
/// record to the context.
pub struct AuthStage {
    directory: UserDirectoryRef,
}

impl AuthStage {
    pub fn new(directory: UserDirectoryRef) -> Self {
        Self { directory }
    }
}

impl Stage for AuthStage {
    fn name(&self) -> &'static str {
        "authenticate"
    }

    fn process(&self, ctx: &mut Context) -> Result<()> {
        let user_id = &ctx.transaction.user_id;

        let user = self
            .directory
            .lookup(user_id)
            .ok_or_else(|| PipelineError::Auth(format!("user {user_id} does not exist")))?;

        if !user.active {
            return Err(PipelineError::Auth(format!("user {user_id} is inactive")));
        }

        ctx.user = Some(user);
        Ok(())
    }
}
