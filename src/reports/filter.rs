//! Report filters
//!
//! Narrow a transaction list by free text, category, type, amount range and
//! date range.
//! Every bound is inclusive and every criterion is optional.

use chrono::{DateTime, Utc};

use crate::models::{Transaction, TransactionType};

/// Options for filtering transactions in reports and exports
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    /// Case-insensitive substring of the description or category
    pub search: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    /// Income or expense only
    pub kind: Option<TransactionType>,
    /// Minimum amount, inclusive
    pub min_amount: Option<f64>,
    /// Maximum amount, inclusive
    pub max_amount: Option<f64>,
    /// Earliest date, inclusive
    pub from: Option<DateTime<Utc>>,
    /// Latest date, inclusive
    pub to: Option<DateTime<Utc>>,
}

impl ReportFilter {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by free text; blank text matches everything
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        let text = text.trim();
        self.search = (!text.is_empty()).then(|| text.to_lowercase());
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by transaction type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by amount range
    pub fn amount_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    /// Filter by date range
    pub fn date_range(mut self, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Check a single transaction against every criterion
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.matches_search(txn)
            && self.category.as_deref().map_or(true, |c| txn.category == c)
            && self.kind.map_or(true, |k| txn.kind == k)
            && self.min_amount.map_or(true, |min| txn.amount >= min)
            && self.max_amount.map_or(true, |max| txn.amount <= max)
            && self.from.map_or(true, |from| txn.date >= from)
            && self.to.map_or(true, |to| txn.date <= to)
    }

    fn matches_search(&self, txn: &Transaction) -> bool {
        match &self.search {
            Some(needle) => {
                let needle = needle.to_lowercase();
                txn.description.to_lowercase().contains(&needle)
                    || txn.category.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }

    /// Matching transactions, in their original order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionDraft, TransactionId};
    use chrono::TimeZone;

    fn txn(kind: TransactionType, amount: f64, category: &str, day: u32) -> Transaction {
        TransactionDraft::new(
            kind,
            amount,
            format!("{} on the {}th", category, day),
            category,
            Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0).unwrap(),
        )
        .into_transaction(TransactionId::new())
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(TransactionType::Expense, 100.0, "Food & Dining", 5),
            txn(TransactionType::Expense, 2500.0, "Groceries", 10),
            txn(TransactionType::Income, 75000.0, "Salary", 1),
            txn(TransactionType::Expense, 500.0, "Food & Dining", 20),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let list = sample();
        assert_eq!(ReportFilter::new().apply(&list).len(), 4);
    }

    #[test]
    fn test_category_and_kind() {
        let list = sample();

        let food = ReportFilter::new().category("Food & Dining").apply(&list);
        assert_eq!(food.len(), 2);

        let income = ReportFilter::new().kind(TransactionType::Income).apply(&list);
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].category, "Salary");
    }

    #[test]
    fn test_amount_bounds_inclusive() {
        let list = sample();
        let mid = ReportFilter::new()
            .amount_range(Some(500.0), Some(2500.0))
            .apply(&list);

        let amounts: Vec<f64> = mid.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![2500.0, 500.0]);
    }

    #[test]
    fn test_date_bounds_inclusive() {
        let list = sample();
        let from = Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();

        let range = ReportFilter::new()
            .date_range(Some(from), Some(to))
            .apply(&list);
        assert_eq!(range.len(), 2);
    }

    #[test]
    fn test_search_description_or_category() {
        let list = sample();

        let dining = ReportFilter::new().search("DINING").apply(&list);
        assert_eq!(dining.len(), 2);

        let by_text = ReportFilter::new().search("the 10th").apply(&list);
        assert_eq!(by_text.len(), 1);
        assert_eq!(by_text[0].category, "Groceries");

        let combined = ReportFilter::new()
            .search("dining")
            .amount_range(Some(200.0), None)
            .apply(&list);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].amount, 500.0);

        assert_eq!(ReportFilter::new().search("   ").apply(&list).len(), 4);
        assert!(ReportFilter::new().search("rent").apply(&list).is_empty());
    }
}
