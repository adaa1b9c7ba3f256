//! # btc-checkout
//!
//! A sequential transaction-processing pipeline for BTC purchase requests:
//! validate the request, authenticate the user, convert the BTC amount into
//! a fiat total, apply a fixed USD fee, persist the result.
//!
//! The pipeline is a strict linear chain of [`Stage`]s sharing one mutable
//! [`Context`] per run; the first failing stage short-circuits the chain with
//! a typed [`PipelineError`]. External collaborators (rates, users, storage)
//! sit behind the narrow ports in [`domain::ports`] and can be swapped for
//! any conforming backend.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use rust_decimal_macros::dec;
//! use btc_checkout::application::stages::standard_pipeline;
//! use btc_checkout::domain::currency::Currency;
//! use btc_checkout::domain::transaction::Transaction;
//! use btc_checkout::infrastructure::in_memory::InMemorySink;
//! use btc_checkout::infrastructure::rates::FixedRateProvider;
//! use btc_checkout::infrastructure::users::InMemoryUserDirectory;
//!
//! let pipeline = standard_pipeline(
//!     Arc::new(FixedRateProvider::new()),
//!     Arc::new(InMemoryUserDirectory::seeded()),
//!     Arc::new(InMemorySink::new()),
//! );
//! let ctx = pipeline
//!     .run(Transaction::new("u001", dec!(0.01), Currency::Usd))
//!     .expect("pipeline run");
//! assert_eq!(ctx.transaction.total_base, Some(dec!(655.00)));
//! ```
//!
//! [`Stage`]: application::pipeline::Stage
//! [`Context`]: application::context::Context
//! [`PipelineError`]: error::PipelineError

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::context::Context;
pub use application::pipeline::{FailedRun, Pipeline, Stage};
pub use domain::currency::Currency;
pub use domain::transaction::Transaction;
pub use domain::user::User;
pub use error::{PipelineError, Result};
