//! Display formatting for terminal output

pub mod investment;
pub mod report;
pub mod transaction;

pub use investment::format_investment_table;
pub use report::{
    format_budget_status, format_category_totals, format_daily_net_spend, format_month_trend,
    format_period_stats, format_portfolio_summary,
};
pub use transaction::{format_transaction_details, format_transaction_table};
