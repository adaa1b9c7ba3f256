//! Presentation-format adapters.

pub mod report;
