//! Suggested categories and payment methods
//!
//! Categories stay open strings on every record. These lists only seed
//! pickers and help output; nothing validates against them.

use super::transaction::TransactionType;

/// Which transaction types a suggested category applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    Income,
    Expense,
    Both,
}

impl CategoryScope {
    /// Check whether a category with this scope fits the given type
    pub fn applies_to(&self, kind: TransactionType) -> bool {
        match self {
            Self::Both => true,
            Self::Income => kind.is_income(),
            Self::Expense => kind.is_expense(),
        }
    }
}

/// A suggested transaction category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub scope: CategoryScope,
}

const fn cat(name: &'static str, icon: &'static str, scope: CategoryScope) -> SuggestedCategory {
    SuggestedCategory { name, icon, scope }
}

/// Default transaction categories, expense first
pub const TRANSACTION_CATEGORIES: &[SuggestedCategory] = &[
    cat("Food & Dining", "🍽️", CategoryScope::Expense),
    cat("Transportation", "🚗", CategoryScope::Expense),
    cat("Groceries", "🛒", CategoryScope::Expense),
    cat("Utilities & Bills", "⚡", CategoryScope::Expense),
    cat("Rent/EMI", "🏠", CategoryScope::Expense),
    cat("Healthcare", "🏥", CategoryScope::Expense),
    cat("Education", "📚", CategoryScope::Expense),
    cat("Entertainment", "🎬", CategoryScope::Expense),
    cat("Shopping", "🛍️", CategoryScope::Expense),
    cat("Travel", "✈️", CategoryScope::Expense),
    cat("Personal Care", "💅", CategoryScope::Expense),
    cat("Fuel/Petrol", "⛽", CategoryScope::Expense),
    cat("Salary", "💼", CategoryScope::Income),
    cat("Freelance", "💻", CategoryScope::Income),
    cat("Business", "🏢", CategoryScope::Income),
    cat("Investment", "📈", CategoryScope::Income),
    cat("Rental Income", "🏘️", CategoryScope::Income),
    cat("Other Income", "💰", CategoryScope::Income),
];

/// Default investment categories
pub const INVESTMENT_CATEGORIES: &[&str] =
    &["Stocks", "Mutual Funds", "Gold", "FD", "Crypto", "Real Estate"];

/// A suggested payment method: stored value and display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethod {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PAYMENT_METHODS: &[PaymentMethod] = &[
    PaymentMethod { value: "cash", label: "Cash" },
    PaymentMethod { value: "upi", label: "UPI" },
    PaymentMethod { value: "card", label: "Debit/Credit Card" },
    PaymentMethod { value: "netbanking", label: "Net Banking" },
    PaymentMethod { value: "wallet", label: "Digital Wallet" },
    PaymentMethod { value: "rtgs", label: "RTGS/NEFT" },
    PaymentMethod { value: "cheque", label: "Cheque" },
];

/// Suggested categories for a transaction type
pub fn categories_for(kind: TransactionType) -> impl Iterator<Item = &'static SuggestedCategory> {
    TRANSACTION_CATEGORIES
        .iter()
        .filter(move |c| c.scope.applies_to(kind))
}

/// Display label for a stored payment method value, if it is a known one
pub fn payment_method_label(value: &str) -> Option<&'static str> {
    PAYMENT_METHODS
        .iter()
        .find(|m| m.value.eq_ignore_ascii_case(value))
        .map(|m| m.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_for_type() {
        let income: Vec<_> = categories_for(TransactionType::Income).map(|c| c.name).collect();
        assert_eq!(income.len(), 6);
        assert!(income.contains(&"Salary"));
        assert!(!income.contains(&"Groceries"));

        let expense: Vec<_> = categories_for(TransactionType::Expense).map(|c| c.name).collect();
        assert_eq!(expense.len(), 12);
        assert!(expense.contains(&"Rent/EMI"));
    }

    #[test]
    fn test_both_scope() {
        assert!(CategoryScope::Both.applies_to(TransactionType::Income));
        assert!(CategoryScope::Both.applies_to(TransactionType::Expense));
    }

    #[test]
    fn test_payment_method_label() {
        assert_eq!(payment_method_label("upi"), Some("UPI"));
        assert_eq!(payment_method_label("NetBanking"), Some("Net Banking"));
        assert_eq!(payment_method_label("barter"), None);
    }
}
