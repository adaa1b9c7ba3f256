//! Domain records and the ports the pipeline depends on.

pub mod currency;
pub mod money;
pub mod ports;
pub mod transaction;
pub mod user;
