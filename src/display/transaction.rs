//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{format_inr, payment_method_label, Transaction, TransactionType};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn from_transaction(txn: &Transaction) -> Self {
        let sign = match txn.kind {
            TransactionType::Income => "+",
            TransactionType::Expense => "-",
        };
        let payment = txn
            .payment_method
            .as_deref()
            .map(|m| payment_method_label(m).unwrap_or(m).to_string())
            .unwrap_or_default();

        Self {
            id: txn.id.short().to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: txn.description.clone(),
            category: txn.category.clone(),
            payment,
            amount: format!("{}{}", sign, format_inr(txn.amount)),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table<'a, I>(transactions: I) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<TransactionRow> = transactions
        .into_iter()
        .map(TransactionRow::from_transaction)
        .collect();

    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d %H:%M")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", format_inr(txn.amount)));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if let Some(method) = &txn.payment_method {
        let label = payment_method_label(method).unwrap_or(method);
        output.push_str(&format!("Payment:     {}\n", label));
    }
    if let Some(notes) = &txn.notes {
        output.push_str(&format!("Notes:       {}\n", notes));
    }

    output
}
