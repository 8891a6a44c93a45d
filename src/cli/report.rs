//! CLI commands for reports
//!
//! Dashboard, filtered reports, CSV export and the category listing.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use super::{parse_date, parse_end_date, parse_month};
use crate::display::{
    format_budget_status, format_category_totals, format_daily_net_spend, format_month_trend,
    format_period_stats, format_portfolio_summary, format_transaction_table,
};
use crate::error::{FinanceError, FinanceResult};
use crate::export::export_transactions_csv;
use crate::models::{
    categories_for, format_inr, TransactionType, INVESTMENT_CATEGORIES, PAYMENT_METHODS,
};
use crate::reports::{
    categories_in_use, daily_net_spend, expense_breakdown, month_bounds, monthly_expense_trend,
    monthly_stats, recent_transactions, year_month, BudgetStatus, PeriodStats, PortfolioSummary,
    ReportFilter,
};
use crate::services::FinanceContext;
use crate::storage::KeyValueStore;

const TREND_MONTHS: usize = 6;
const RECENT_COUNT: usize = 8;

/// Transaction filter options shared by `report` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Text to look for in the description or category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only income or only expenses
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Minimum amount
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum amount
    #[arg(long)]
    pub max: Option<f64>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,
}

impl ReportArgs {
    /// Convert the raw arguments into a [`ReportFilter`]
    pub fn to_filter(&self) -> FinanceResult<ReportFilter> {
        let mut filter = ReportFilter::new().amount_range(self.min, self.max);

        if let Some(text) = &self.search {
            filter = filter.search(text.clone());
        }
        if let Some(category) = &self.category {
            filter = filter.category(category.clone());
        }
        if let Some(kind) = &self.kind {
            let kind: TransactionType = kind.parse().map_err(FinanceError::InvalidInput)?;
            filter = filter.kind(kind);
        }

        let from = self.from.as_deref().map(parse_date).transpose()?;
        let to = self.to.as_deref().map(parse_end_date).transpose()?;
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(FinanceError::InvalidInput(
                    "--from must not be after --to".into(),
                ));
            }
        }

        Ok(filter.date_range(from, to))
    }
}

/// Print the monthly dashboard
pub fn handle_dashboard<S: KeyValueStore>(
    ctx: &FinanceContext<S>,
    month: Option<String>,
) -> FinanceResult<()> {
    let now = Utc::now();
    let (year, month) = match month {
        Some(m) => parse_month(&m)?,
        None => year_month(now),
    };
    let Some((start, end)) = month_bounds(year, month) else {
        return Err(FinanceError::InvalidInput(format!(
            "Invalid month: {}-{:02}",
            year, month
        )));
    };

    let transactions = ctx.transactions();
    let in_month: Vec<_> = transactions
        .iter()
        .filter(|t| t.date >= start && t.date <= end)
        .collect();
    let stats = monthly_stats(transactions, year, month);
    let all_time = PeriodStats::from_transactions(transactions);

    print!("{}", format_period_stats(&start.format("%B %Y").to_string(), &stats));
    println!();
    print!("{}", format_budget_status(&BudgetStatus::compute(ctx.budget(), &stats)));
    println!();
    println!("All-time balance: {}", format_inr(all_time.balance));
    println!();

    println!("Spending by category");
    print!("{}", format_category_totals(&expense_breakdown(in_month)));
    println!();

    println!("Expenses, last {} months", TREND_MONTHS);
    print!(
        "{}",
        format_month_trend(&monthly_expense_trend(transactions, year, month, TREND_MONTHS))
    );
    println!();

    println!("Recent transactions");
    print!(
        "{}",
        format_transaction_table(recent_transactions(transactions, RECENT_COUNT))
    );

    if !ctx.investments().is_empty() {
        println!();
        print!(
            "{}",
            format_portfolio_summary(&PortfolioSummary::compute(ctx.investments(), now))
        );
    }

    Ok(())
}

/// Print the transactions matching a filter with their totals
pub fn handle_report<S: KeyValueStore>(
    ctx: &FinanceContext<S>,
    args: &ReportArgs,
) -> FinanceResult<()> {
    let filter = args.to_filter()?;
    let mut matching = filter.apply(ctx.transactions());
    matching.sort_by(|a, b| b.date.cmp(&a.date));

    print!("{}", format_transaction_table(matching.iter().copied()));
    println!();
    print!(
        "{}",
        format_period_stats("Totals", &PeriodStats::from_transactions(matching.iter().copied()))
    );

    if !matching.is_empty() {
        println!();
        println!("Net spend by day");
        print!("{}", format_daily_net_spend(&daily_net_spend(matching.iter().copied())));
    }

    if filter.kind != Some(TransactionType::Income) {
        println!();
        println!("Spending by category");
        print!("{}", format_category_totals(&expense_breakdown(matching)));
    }

    Ok(())
}

/// Export matching transactions to CSV, to a file or stdout
pub fn handle_export<S: KeyValueStore>(
    ctx: &FinanceContext<S>,
    args: &ReportArgs,
    output: Option<PathBuf>,
) -> FinanceResult<()> {
    let filter = args.to_filter()?;
    let mut matching = filter.apply(ctx.transactions());
    matching.sort_by(|a, b| b.date.cmp(&a.date));

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                FinanceError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let rows = export_transactions_csv(matching, BufWriter::new(file))?;
            println!("Exported {} transactions to {}", rows, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_transactions_csv(matching, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

/// List suggested categories, categories in use, and payment methods
pub fn handle_categories<S: KeyValueStore>(ctx: &FinanceContext<S>) -> FinanceResult<()> {
    println!("Expense categories:");
    for cat in categories_for(TransactionType::Expense) {
        println!("  {} {}", cat.icon, cat.name);
    }

    println!();
    println!("Income categories:");
    for cat in categories_for(TransactionType::Income) {
        println!("  {} {}", cat.icon, cat.name);
    }

    println!();
    println!("Investment categories:");
    for name in INVESTMENT_CATEGORIES {
        println!("  {}", name);
    }

    println!();
    println!("Payment methods:");
    for method in PAYMENT_METHODS {
        println!("  {:<12} {}", method.value, method.label);
    }

    let in_use = categories_in_use(ctx.transactions());
    if !in_use.is_empty() {
        println!();
        println!("In use: {}", in_use.join(", "));
    }

    Ok(())
}
