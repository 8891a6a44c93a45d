//! Transaction model
//!
//! An income or expense record. The amount is always a magnitude; whether
//! money came in or went out is carried by [`TransactionType`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::sanitize_amount;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Check if this is income
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    /// Lowercase name as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

/// A transaction without its id: the payload for add and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub amount: f64,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TransactionDraft {
    /// Create a draft with the required fields
    pub fn new(
        kind: TransactionType,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
            kind,
            date,
            payment_method: None,
            notes: None,
        }
    }

    /// Set the payment method
    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    /// Set free-form notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach an id, coercing invalid amounts to zero
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: sanitize_amount(self.amount),
            description: self.description,
            category: self.category,
            kind: self.kind,
            date: self.date,
            payment_method: self.payment_method,
            notes: self.notes,
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Non-negative magnitude
    pub amount: f64,

    pub description: String,

    /// Open category label
    pub category: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Copy of every field except the id
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            amount: self.amount,
            description: self.description.clone(),
            category: self.category.clone(),
            kind: self.kind,
            date: self.date,
            payment_method: self.payment_method.clone(),
            notes: self.notes.clone(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.description,
            self.category
        )
    }
}
