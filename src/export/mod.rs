//! Export module for fintrack
//!
//! Spreadsheet-friendly CSV export of (filtered) transactions.

pub mod csv;

pub use self::csv::{export_transactions_csv, TRANSACTION_HEADERS};
