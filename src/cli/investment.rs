//! Investment CLI commands

use chrono::Utc;
use clap::Subcommand;

use super::{parse_date, resolve_investment_id};
use crate::display::{
    format_category_totals, format_investment_table, format_month_trend, format_portfolio_summary,
};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{format_inr, parse_amount, InvestmentDraft};
use crate::reports::{investment_breakdown, monthly_investment_totals, PortfolioSummary};
use crate::services::FinanceContext;
use crate::storage::KeyValueStore;

/// Investment subcommands
#[derive(Subcommand)]
pub enum InvestmentCommands {
    /// Record a new investment
    Add {
        /// Amount invested
        amount: String,
        /// Category (Stocks, Mutual Funds, Gold, ...)
        category: String,
        /// Expected annual return in percent
        #[arg(short = 'r', long = "return")]
        expected_return: Option<f64>,
        /// Investment date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List investments with estimated values
    List {
        /// Also show totals per category
        #[arg(long)]
        by_category: bool,
    },
    /// Edit an investment
    Edit {
        /// Investment ID or unique prefix
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New expected annual return in percent
        #[arg(short = 'r', long = "return")]
        expected_return: Option<f64>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete an investment
    Delete {
        /// Investment ID or unique prefix
        id: String,
    },
}

/// Handle an investment command
pub fn handle_investment_command<S: KeyValueStore>(
    ctx: &mut FinanceContext<S>,
    cmd: InvestmentCommands,
) -> FinanceResult<()> {
    match cmd {
        InvestmentCommands::Add {
            amount,
            category,
            expected_return,
            date,
            notes,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Utc::now(),
            };

            let mut draft = InvestmentDraft::new(parse_amount(&amount), category, date);
            draft.expected_return = expected_return;
            draft.notes = notes;

            let id = ctx.add_investment(draft);
            if let Some(inv) = ctx.find_investment(&id) {
                println!("Recorded investment:");
                println!("  ID:       {}", inv.id);
                println!("  Category: {}", inv.category);
                println!("  Amount:   {}", format_inr(inv.amount));
            }
        }

        InvestmentCommands::List { by_category } => {
            let now = Utc::now();
            print!("{}", format_investment_table(ctx.investments(), now));
            if !ctx.investments().is_empty() {
                println!();
                print!(
                    "{}",
                    format_portfolio_summary(&PortfolioSummary::compute(ctx.investments(), now))
                );
                println!();
                println!("Invested by month");
                print!("{}", format_month_trend(&monthly_investment_totals(ctx.investments())));
            }
            if by_category {
                println!();
                print!("{}", format_category_totals(&investment_breakdown(ctx.investments())));
            }
        }

        InvestmentCommands::Edit {
            id,
            amount,
            category,
            expected_return,
            date,
            notes,
        } => {
            let id = resolve_investment_id(ctx, &id)?;
            let mut investment = ctx
                .find_investment(&id)
                .cloned()
                .ok_or_else(|| FinanceError::investment_not_found(id.as_str()))?;

            if let Some(amount) = amount {
                investment.amount = parse_amount(&amount);
            }
            if let Some(category) = category {
                investment.category = category;
            }
            if expected_return.is_some() {
                investment.expected_return = expected_return;
            }
            if let Some(date) = date {
                investment.date = parse_date(&date)?;
            }
            if notes.is_some() {
                investment.notes = notes;
            }

            ctx.update_investment(investment);
            println!("Updated investment {}", id);
        }

        InvestmentCommands::Delete { id } => {
            let id = resolve_investment_id(ctx, &id)?;
            ctx.delete_investment(&id);
            println!("Deleted investment {}", id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn add(ctx: &mut FinanceContext<MemoryStore>, amount: &str, category: &str) {
        handle_investment_command(
            ctx,
            InvestmentCommands::Add {
                amount: amount.into(),
                category: category.into(),
                expected_return: Some(12.0),
                date: Some("2024-04-01".into()),
                notes: None,
            },
        )
        .unwrap();
    }

    #[test]
    fn test_add_edit_delete() {
        let mut ctx = FinanceContext::init(MemoryStore::new());
        add(&mut ctx, "25,000", "Mutual Funds");

        let inv = ctx.investments()[0].clone();
        assert_eq!(inv.amount, 25000.0);
        assert_eq!(inv.expected_return, Some(12.0));

        handle_investment_command(
            &mut ctx,
            InvestmentCommands::Edit {
                id: inv.id.to_string(),
                amount: None,
                category: Some("Stocks".into()),
                expected_return: None,
                date: None,
                notes: None,
            },
        )
        .unwrap();

        let edited = ctx.find_investment(&inv.id).unwrap();
        assert_eq!(edited.category, "Stocks");
        assert_eq!(edited.expected_return, Some(12.0));

        handle_investment_command(&mut ctx, InvestmentCommands::Delete { id: inv.id.to_string() })
            .unwrap();
        assert!(ctx.investments().is_empty());
    }

    #[test]
    fn test_list_runs_on_empty_portfolio() {
        let mut ctx = FinanceContext::init(MemoryStore::new());
        handle_investment_command(&mut ctx, InvestmentCommands::List { by_category: true })
            .unwrap();
    }
}
