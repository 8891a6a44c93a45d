//! Service layer for fintrack
//!
//! [`FinanceContext`] owns the working copy of all finance data and keeps
//! the key-value store in step with it.

pub mod finance;
pub mod theme;

pub use finance::{FinanceContext, FinanceSnapshot};
pub use theme::ThemeSink;
