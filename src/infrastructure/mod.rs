//! Concrete backends for the domain ports.

pub mod csv_file;
pub mod in_memory;
pub mod rates;
pub mod record;
pub mod users;
