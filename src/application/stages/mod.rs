//! The five concrete stages, in their pipeline order.

mod authenticate;
mod convert;
mod fee;
mod persist;
mod validate;

pub use authenticate::AuthStage;
pub use convert::ConversionStage;
pub use fee::FeeStage;
pub use persist::PersistStage;
pub use validate::ValidationStage;

use super::pipeline::Pipeline;
use crate::domain::ports::{RateProviderRef, TransactionSinkRef, UserDirectoryRef};

/// Assembles the five stages in their fixed order:
/// validate → authenticate → convert → fee → persist.
pub fn standard_pipeline(
    rates: RateProviderRef,
    directory: UserDirectoryRef,
    sink: TransactionSinkRef,
) -> Pipeline {
    Pipeline::new(vec![
        Box::new(ValidationStage),
        Box::new(AuthStage::new(directory)),
        Box::new(ConversionStage::new(rates.clone())),
        Box::new(FeeStage::new(rates)),
        Box::new(PersistStage::new(sink)),
    ])
}
