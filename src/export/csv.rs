//! CSV Export functionality
//!
//! Writes transactions as `Date,Type,Category,Amount,Description,Notes`.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;

/// Column headers, in order
pub const TRANSACTION_HEADERS: [&str; 6] =
    ["Date", "Type", "Category", "Amount", "Description", "Notes"];

/// Export transactions to CSV
///
/// Returns the number of rows written, not counting the header.
pub fn export_transactions_csv<'a, I, W>(transactions: I, writer: W) -> FinanceResult<usize>
where
    I: IntoIterator<Item = &'a Transaction>,
    W: Write,
{
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(TRANSACTION_HEADERS)?;

    let mut rows = 0;
    for txn in transactions {
        let date = txn.date.format("%Y-%m-%d").to_string();
        let amount = txn.amount.to_string();
        csv_writer.write_record([
            date.as_str(),
            txn.kind.as_str(),
            txn.category.as_str(),
            amount.as_str(),
            txn.description.as_str(),
            txn.notes.as_deref().unwrap_or(""),
        ])?;
        rows += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(rows)
}
