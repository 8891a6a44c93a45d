//! Reports module for fintrack
//!
//! Read-only aggregation over the finance context's transactions and
//! investments: period totals, budget status, category and monthly
//! breakdowns, filters and portfolio valuation.

pub mod breakdown;
pub mod filter;
pub mod portfolio;
pub mod summary;

pub use breakdown::{
    expense_breakdown, investment_breakdown, monthly_investment_totals, CategoryTotal,
};
pub use filter::ReportFilter;
pub use portfolio::{estimated_value, PortfolioSummary};
pub use summary::{
    categories_in_use, daily_net_spend, month_bounds, monthly_expense_trend, monthly_stats,
    recent_transactions, year_month, BudgetStatus, MonthTotal, PeriodStats,
};
