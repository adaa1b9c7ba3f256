//! JSON report entries for a batch run.

use crate::application::context::Context;
use crate::application::pipeline::FailedRun;
use crate::domain::transaction::Transaction;
use crate::domain::user::User;
use serde::Serialize;

/// One entry in the batch report: the outcome of a single pipeline run.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Success {
        ok: bool,
        transaction: Transaction,
        user: Option<User>,
        storage_result: &'static str,
    },
    Failure {
        ok: bool,
        error: &'static str,
        message: String,
        transaction: Transaction,
    },
}

impl From<Result<Context, FailedRun>> for ReportEntry {
    fn from(outcome: Result<Context, FailedRun>) -> Self {
        match outcome {
            Ok(ctx) => ReportEntry::Success {
                ok: true,
                transaction: ctx.transaction,
                user: ctx.user,
                storage_result: "ok",
            },
            Err(failed) => ReportEntry::Failure {
                ok: false,
                error: failed.error.kind(),
                message: failed.error.to_string(),
                transaction: failed.context.transaction,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::Currency;
    use crate::error::PipelineError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_success_entry_shape() {
        let mut ctx = Context::new(Transaction::new("u001", dec!(0.01), Currency::Usd));
        ctx.user = Some(User::new("u001", "Alice", true));
        ctx.stored_id = Some(1);

        let entry = ReportEntry::from(Ok(ctx));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["storage_result"], "ok");
        assert_eq!(json["user"]["name"], "Alice");
        assert_eq!(json["transaction"]["user_id"], "u001");
    }

    #[test]
    fn test_failure_entry_shape() {
        let ctx = Context::new(Transaction::new("u999", dec!(0.02), Currency::Usd));
        let failed = FailedRun {
            error: PipelineError::Auth("user u999 does not exist".into()),
            context: ctx,
        };

        let entry = ReportEntry::from(Err(failed));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "auth");
        assert_eq!(json["message"], "auth error: user u999 does not exist");
        assert_eq!(json["transaction"]["user_id"], "u999");
    }
}
