//! Core data models for fintrack
//!
//! Transactions and investments are flat, independent collections; budget
//! and settings are singletons.

pub mod category;
pub mod ids;
pub mod investment;
pub mod money;
pub mod settings;
pub mod transaction;

pub use category::{
    categories_for, payment_method_label, CategoryScope, PaymentMethod, SuggestedCategory,
    INVESTMENT_CATEGORIES, PAYMENT_METHODS, TRANSACTION_CATEGORIES,
};
pub use ids::{InvestmentId, TransactionId};
pub use investment::{Investment, InvestmentDraft};
pub use money::{format_inr, parse_amount, sanitize_amount, sanitize_budget};
pub use settings::{AppSettings, ThemeMode};
pub use transaction::{Transaction, TransactionDraft, TransactionType};
