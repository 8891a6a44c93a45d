//! Configuration module for fintrack
//!
//! Resolves where the command-line front-end keeps its key-value store.

pub mod paths;

pub use paths::{FinancePaths, DATA_DIR_ENV};
