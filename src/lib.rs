//! fintrack - personal income, expense and investment tracking
//!
//! This library holds the state and persistence layer of the fintrack
//! application: an in-memory finance context that is the single source of
//! truth for transactions, investments, the monthly budget and the theme,
//! written through to a plain string key-value store on every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, investments, settings)
//! - `storage`: Key-value stores and the JSON codec for stored values
//! - `services`: The finance context and theme hook
//! - `reports`: Read-only aggregation (period totals, breakdowns, portfolio)
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::services::FinanceContext;
//! use fintrack::storage::MemoryStore;
//!
//! let ctx = FinanceContext::init(MemoryStore::new());
//! assert_eq!(ctx.transactions().len(), 3);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
pub use services::{FinanceContext, FinanceSnapshot, ThemeSink};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
