//! Pipeline orchestration: the context, the stage abstraction and the
//! concrete stages.

pub mod context;
pub mod pipeline;
pub mod stages;
