//! Storage initialization
//!
//! Handles first-run sample data and returning a store to that state.

use chrono::Utc;
use tracing::{info, warn};

use crate::error::FinanceError;
use crate::models::{Transaction, TransactionDraft, TransactionId, TransactionType};

use super::codec::{decode_transactions, encode_transactions};
use super::{keys, KeyValueStore};

/// The sample dataset written on first run, with fresh ids and the current time
pub fn sample_transactions() -> Vec<Transaction> {
    let now = Utc::now();

    vec![
        TransactionDraft::new(TransactionType::Income, 75000.0, "Monthly Salary", "Salary", now)
            .with_payment_method("netbanking")
            .with_notes("Sample data")
            .into_transaction(TransactionId::new()),
        TransactionDraft::new(
            TransactionType::Expense,
            2850.0,
            "Grocery Shopping",
            "Groceries",
            now,
        )
        .with_payment_method("upi")
        .with_notes("Sample data")
        .into_transaction(TransactionId::new()),
        TransactionDraft::new(TransactionType::Expense, 18000.0, "House Rent", "Rent/EMI", now)
            .with_payment_method("upi")
            .into_transaction(TransactionId::new()),
    ]
}

/// Write the sample transactions if the store holds none
///
/// Goes straight to the store; callers load afterwards. Returns whether
/// seeding happened. Existing data is never overwritten: a value that
/// cannot be read is an error, not an empty store.
pub fn seed_sample_data_if_needed<S: KeyValueStore + ?Sized>(
    store: &mut S,
) -> Result<bool, FinanceError> {
    let existing = decode_transactions(store.read(keys::TRANSACTIONS)?.as_deref());
    if !existing.is_empty() {
        return Ok(false);
    }

    let sample = sample_transactions();
    store.write(keys::TRANSACTIONS, &encode_transactions(&sample)?)?;
    info!(count = sample.len(), "seeded sample transactions");

    Ok(true)
}

/// Remove every key the finance layer owns
///
/// Keeps going past individual failures so one bad key doesn't strand the
/// rest; the first error is returned.
pub fn reset_all_data<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), FinanceError> {
    let mut first_error = None;

    for key in keys::ALL {
        if let Err(e) = store.remove(key) {
            warn!(key, error = %e, "failed to clear store key");
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
