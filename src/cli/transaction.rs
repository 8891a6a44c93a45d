//! Transaction CLI commands
//!
//! Implements CLI commands for recording income and expenses.

use chrono::Utc;
use clap::Subcommand;

use super::{parse_date, resolve_transaction_id};
use crate::display::transaction::{format_transaction_details, format_transaction_table};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{format_inr, parse_amount, Transaction, TransactionDraft, TransactionType};
use crate::reports::{recent_transactions, ReportFilter};
use crate::services::FinanceContext;
use crate::storage::KeyValueStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (e.g., "2850" or "₹1,250.50")
        amount: String,
        /// What the money was for
        description: String,
        /// Category name
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// Transaction type (income or expense)
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Payment method (cash, upi, card, ...)
        #[arg(short, long)]
        payment: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Only transactions whose description or category contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or unique prefix
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID or unique prefix
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New payment method
        #[arg(short, long)]
        payment: Option<String>,
        /// New notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID or unique prefix
        id: String,
    },
}

/// Newest first, optionally narrowed by free text
fn list_transactions<'a>(
    transactions: &'a [Transaction],
    search: Option<&str>,
    limit: usize,
) -> Vec<&'a Transaction> {
    match search {
        Some(text) => {
            let filter = ReportFilter::new().search(text);
            let mut found = filter.apply(transactions);
            found.sort_by(|a, b| b.date.cmp(&a.date));
            found.truncate(limit);
            found
        }
        None => recent_transactions(transactions, limit),
    }
}

fn parse_kind(input: &str) -> FinanceResult<TransactionType> {
    input.parse().map_err(FinanceError::InvalidInput)
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    ctx: &mut FinanceContext<S>,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            category,
            kind,
            date,
            payment,
            notes,
        } => {
            let kind = parse_kind(&kind)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Utc::now(),
            };

            let mut draft =
                TransactionDraft::new(kind, parse_amount(&amount), description, category, date);
            draft.payment_method = payment;
            draft.notes = notes;

            let id = ctx.add_transaction(draft);
            if let Some(txn) = ctx.find_transaction(&id) {
                println!("Created transaction:");
                println!("  ID:       {}", txn.id);
                println!("  Date:     {}", txn.date.format("%Y-%m-%d"));
                println!("  Type:     {}", txn.kind);
                println!("  Amount:   {}", format_inr(txn.amount));
                println!("  Category: {}", txn.category);
            }
        }

        TransactionCommands::List { limit, search } => {
            let listed = list_transactions(ctx.transactions(), search.as_deref(), limit);
            print!("{}", format_transaction_table(listed));
        }

        TransactionCommands::Show { id } => {
            let id = resolve_transaction_id(ctx, &id)?;
            let txn = ctx
                .find_transaction(&id)
                .ok_or_else(|| FinanceError::transaction_not_found(id.as_str()))?;
            print!("{}", format_transaction_details(txn));
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            category,
            kind,
            date,
            payment,
            notes,
        } => {
            let id = resolve_transaction_id(ctx, &id)?;
            let mut draft = ctx
                .find_transaction(&id)
                .map(|t| t.to_draft())
                .ok_or_else(|| FinanceError::transaction_not_found(id.as_str()))?;

            if let Some(amount) = amount {
                draft.amount = parse_amount(&amount);
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(kind) = kind {
                draft.kind = parse_kind(&kind)?;
            }
            if let Some(date) = date {
                draft.date = parse_date(&date)?;
            }
            if payment.is_some() {
                draft.payment_method = payment;
            }
            if notes.is_some() {
                draft.notes = notes;
            }

            ctx.update_transaction(&id, draft);
            println!("Updated transaction {}", id);
        }

        TransactionCommands::Delete { id } => {
            let id = resolve_transaction_id(ctx, &id)?;
            ctx.delete_transaction(&id);
            println!("Deleted transaction {}", id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_add_and_edit() {
        let mut ctx = FinanceContext::init(MemoryStore::new());

        handle_transaction_command(
            &mut ctx,
            TransactionCommands::Add {
                amount: "₹1,250.50".into(),
                description: "Dinner".into(),
                category: "Food & Dining".into(),
                kind: "expense".into(),
                date: Some("2025-02-01".into()),
                payment: Some("card".into()),
                notes: None,
            },
        )
        .unwrap();

        let added = ctx.transactions()[0].clone();
        assert_eq!(added.amount, 1250.5);
        assert_eq!(added.payment_method.as_deref(), Some("card"));

        handle_transaction_command(
            &mut ctx,
            TransactionCommands::Edit {
                id: added.id.short().to_string(),
                amount: Some("900".into()),
                description: None,
                category: None,
                kind: None,
                date: None,
                payment: None,
                notes: Some("split bill".into()),
            },
        )
        .unwrap();

        let edited = ctx.find_transaction(&added.id).unwrap();
        assert_eq!(edited.amount, 900.0);
        assert_eq!(edited.description, "Dinner");
        assert_eq!(edited.notes.as_deref(), Some("split bill"));
    }

    #[test]
    fn test_invalid_type_rejected() {
        let mut ctx = FinanceContext::init(MemoryStore::new());
        let before = ctx.transactions().len();

        let result = handle_transaction_command(
            &mut ctx,
            TransactionCommands::Add {
                amount: "10".into(),
                description: "x".into(),
                category: "Other".into(),
                kind: "transfer".into(),
                date: None,
                payment: None,
                notes: None,
            },
        );

        assert!(matches!(result, Err(FinanceError::InvalidInput(_))));
        assert_eq!(ctx.transactions().len(), before);
    }

    #[test]
    fn test_list_search() {
        let ctx = FinanceContext::init(MemoryStore::new());

        let rent = list_transactions(ctx.transactions(), Some("rent"), 20);
        assert_eq!(rent.len(), 1);
        assert_eq!(rent[0].description, "House Rent");

        let groceries = list_transactions(ctx.transactions(), Some("GROCER"), 20);
        assert_eq!(groceries.len(), 1);

        assert_eq!(list_transactions(ctx.transactions(), None, 2).len(), 2);
        assert!(list_transactions(ctx.transactions(), Some("vacation"), 20).is_empty());
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut ctx = FinanceContext::init(MemoryStore::new());
        let err = handle_transaction_command(
            &mut ctx,
            TransactionCommands::Delete { id: "no-such-id".into() },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
