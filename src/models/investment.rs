//! Investment model
//!
//! A capital allocation with an optional expected annual return.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::InvestmentId;
use super::money::sanitize_amount;

/// An investment without its id: the payload for add
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDraft {
    pub amount: f64,
    pub category: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl InvestmentDraft {
    /// Create a draft with the required fields
    pub fn new(amount: f64, category: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            expected_return: None,
            notes: None,
        }
    }

    /// Set the expected annual return, in percent
    pub fn with_expected_return(mut self, rate: f64) -> Self {
        self.expected_return = Some(rate);
        self
    }

    /// Set free-form notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach an id
    pub fn into_investment(self, id: InvestmentId) -> Investment {
        Investment {
            id,
            amount: self.amount,
            category: self.category,
            date: self.date,
            expected_return: self.expected_return,
            notes: self.notes,
        }
        .sanitized()
    }
}

/// A recorded investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    /// Unique identifier
    pub id: InvestmentId,

    /// Amount invested
    pub amount: f64,

    /// Open category label (Stocks, Gold, ...)
    pub category: String,

    pub date: DateTime<Utc>,

    /// Expected annual return in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Investment {
    /// Coerce a non-finite amount to zero and a non-finite rate to absent
    pub fn sanitized(mut self) -> Self {
        self.amount = sanitize_amount(self.amount);
        self.expected_return = self.expected_return.filter(|rate| rate.is_finite());
        self
    }

    /// Copy of every field except the id
    pub fn to_draft(&self) -> InvestmentDraft {
        InvestmentDraft {
            amount: self.amount,
            category: self.category.clone(),
            date: self.date,
            expected_return: self.expected_return,
            notes: self.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_into_investment() {
        let date = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let inv = InvestmentDraft::new(10000.0, "Mutual Funds", date)
            .with_expected_return(12.0)
            .into_investment(InvestmentId::from("i-1"));

        assert_eq!(inv.id.as_str(), "i-1");
        assert_eq!(inv.expected_return, Some(12.0));
        assert_eq!(inv.to_draft().category, "Mutual Funds");
    }

    #[test]
    fn test_sanitized() {
        let date = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let mut draft = InvestmentDraft::new(f64::NAN, "Gold", date);
        draft.expected_return = Some(f64::INFINITY);
        let inv = draft.into_investment(InvestmentId::new());

        assert_eq!(inv.amount, 0.0);
        assert_eq!(inv.expected_return, None);
    }

    #[test]
    fn test_serialized_field_names() {
        let date = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let inv = InvestmentDraft::new(5000.0, "FD", date)
            .with_expected_return(7.1)
            .into_investment(InvestmentId::from("i-2"));
        let json = serde_json::to_value(&inv).unwrap();

        assert_eq!(json["expectedReturn"], 7.1);
        assert!(json.get("notes").is_none());
    }
}
