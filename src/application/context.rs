use crate::domain::transaction::Transaction;
use crate::domain::user::User;

/// Per-run scratch space threaded through the stages.
///
/// Created fresh for each [`Pipeline::run`](super::pipeline::Pipeline::run)
/// call and dropped with it. The transaction is always present; the other
/// fields are attached by the stages that produce them.
#[derive(Debug, Clone)]
pub struct Context {
    pub transaction: Transaction,
    /// Resolved account, attached by the auth stage.
    pub user: Option<User>,
    /// Id assigned by the sink, attached by the persist stage on success.
    pub stored_id: Option<u64>,
}

impl Context {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            transaction,
            user: None,
            stored_id: None,
        }
    }
}
