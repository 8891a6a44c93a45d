//! Budget, theme and reset commands
//!
//! The monthly budget and the theme are single values; reset wipes every
//! stored key and restores the sample data.

use chrono::Utc;
use clap::Subcommand;

use crate::display::format_budget_status;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{format_inr, parse_amount, ThemeMode};
use crate::reports::{monthly_stats, year_month, BudgetStatus};
use crate::services::FinanceContext;
use crate::storage::KeyValueStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget
    Set {
        /// Amount (e.g., "30000"); anything unparseable clears the budget
        amount: String,
    },

    /// Show the budget and this month's usage
    Show,

    /// Clear the monthly budget
    Clear,
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    ctx: &mut FinanceContext<S>,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            ctx.set_budget(Some(parse_amount(&amount)));
            println!("Monthly budget set to {}", format_inr(ctx.budget()));
        }

        BudgetCommands::Show => {
            let (year, month) = year_month(Utc::now());
            let stats = monthly_stats(ctx.transactions(), year, month);
            let status = BudgetStatus::compute(ctx.budget(), &stats);
            print!("{}", format_budget_status(&status));
        }

        BudgetCommands::Clear => {
            ctx.set_budget(None);
            println!("Monthly budget cleared");
        }
    }

    Ok(())
}

/// Switch between light and dark mode
pub fn handle_theme<S: KeyValueStore>(
    ctx: &mut FinanceContext<S>,
    theme: Option<ThemeMode>,
) -> FinanceResult<()> {
    match theme {
        Some(theme) => {
            ctx.set_theme(theme);
            println!("Theme set to {}", ctx.settings().theme);
        }
        None => println!("Theme: {}", ctx.settings().theme),
    }
    Ok(())
}

/// Remove all stored data and restore the sample transactions
pub fn handle_reset<S: KeyValueStore>(ctx: &mut FinanceContext<S>, yes: bool) -> FinanceResult<()> {
    if !yes {
        return Err(FinanceError::InvalidInput(
            "reset deletes all transactions, investments and settings; pass --yes to confirm"
                .into(),
        ));
    }

    ctx.reset_data();
    println!(
        "All data reset. {} sample transactions restored.",
        ctx.transactions().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionDraft, TransactionType};
    use crate::storage::{keys, MemoryStore};

    #[test]
    fn test_set_budget_unparseable_is_zero() {
        let mut ctx = FinanceContext::init(MemoryStore::new());
        handle_budget_command(&mut ctx, BudgetCommands::Set { amount: "abc".into() }).unwrap();

        assert_eq!(ctx.budget(), 0.0);
        assert_eq!(ctx.store().read(keys::BUDGET).unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn test_set_and_clear_budget() {
        let mut ctx = FinanceContext::init(MemoryStore::new());
        handle_budget_command(&mut ctx, BudgetCommands::Set { amount: "30,000".into() }).unwrap();
        assert_eq!(ctx.budget(), 30000.0);

        handle_budget_command(&mut ctx, BudgetCommands::Clear).unwrap();
        assert_eq!(ctx.budget(), 0.0);
    }

    #[test]
    fn test_theme() {
        let mut ctx = FinanceContext::init(MemoryStore::new());
        handle_theme(&mut ctx, Some(ThemeMode::Dark)).unwrap();
        assert!(ctx.is_dark_mode());

        handle_theme(&mut ctx, None).unwrap();
        assert!(ctx.is_dark_mode());
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut ctx = FinanceContext::init(MemoryStore::new());
        ctx.add_transaction(TransactionDraft::new(
            TransactionType::Expense,
            50.0,
            "Tea",
            "Food & Dining",
            Utc::now(),
        ));

        assert!(handle_reset(&mut ctx, false).is_err());
        assert_eq!(ctx.transactions().len(), 4);

        handle_reset(&mut ctx, true).unwrap();
        assert_eq!(ctx.transactions().len(), 3);
    }
}
