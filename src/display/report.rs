//! Report display formatting
//!
//! Plain-text renderings of the dashboard figures and category breakdowns.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::format_inr;
use crate::reports::{BudgetStatus, CategoryTotal, MonthTotal, PeriodStats, PortfolioSummary};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Income, expenses and balance
pub fn format_period_stats(title: &str, stats: &PeriodStats) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", title));
    output.push_str(&format!("  Income:       {}\n", format_inr(stats.total_income)));
    output.push_str(&format!("  Expenses:     {}\n", format_inr(stats.total_expenses)));
    output.push_str(&format!("  Balance:      {}\n", format_inr(stats.balance)));
    output.push_str(&format!("  Transactions: {}\n", stats.transaction_count));
    output
}

/// Budget usage for the month
pub fn format_budget_status(status: &BudgetStatus) -> String {
    if status.budget <= 0.0 {
        return "Budget: not set\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Budget: {} ({:.1}% used)\n",
        format_inr(status.budget),
        status.used_percent
    ));
    output.push_str(&format!("  Spent:     {}\n", format_inr(status.spent)));
    output.push_str(&format!("  Remaining: {}\n", format_inr(status.remaining)));
    output.push_str(&format!("  Savings:   {}\n", format_inr(status.savings)));
    if status.is_over_budget() {
        output.push_str("  Over budget!\n");
    }
    output
}

/// Category breakdown as a table
pub fn format_category_totals(rows: &[CategoryTotal]) -> String {
    if rows.is_empty() {
        return "No spending recorded.\n".to_string();
    }

    let rows: Vec<CategoryRow> = rows
        .iter()
        .map(|r| CategoryRow {
            category: r.category.clone(),
            count: r.count,
            total: format_inr(r.total),
            share: format!("{:.1}%", r.percent),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// One line per month with a proportional bar
pub fn format_month_trend(trend: &[MonthTotal]) -> String {
    const BAR_WIDTH: f64 = 30.0;

    let max = trend.iter().map(|m| m.total).fold(0.0_f64, f64::max);
    let mut output = String::new();
    for month in trend {
        let width = if max > 0.0 {
            (month.total / max * BAR_WIDTH).round() as usize
        } else {
            0
        };
        output.push_str(&format!(
            "  {} {:<30} {}\n",
            month.label,
            "█".repeat(width),
            format_inr(month.total)
        ));
    }
    output
}

/// Net spend per day; income days show as negative spend
pub fn format_daily_net_spend(days: &[(NaiveDate, f64)]) -> String {
    if days.is_empty() {
        return "No activity.\n".to_string();
    }

    let mut output = String::new();
    for (day, net) in days {
        let marker = if *net > 0.0 { "spent" } else { "net in" };
        output.push_str(&format!(
            "  {}  {:>16}  {}\n",
            day.format("%Y-%m-%d"),
            format_inr(net.abs()),
            marker
        ));
    }
    output
}

/// Portfolio totals
pub fn format_portfolio_summary(summary: &PortfolioSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Investments: {}\n", summary.count));
    output.push_str(&format!("  Invested:        {}\n", format_inr(summary.total_invested)));
    output.push_str(&format!("  Estimated value: {}\n", format_inr(summary.estimated_value)));
    output.push_str(&format!("  Gain:            {}\n", format_inr(summary.gain)));
    output
}
