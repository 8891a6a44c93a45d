//! Period summaries
//!
//! Totals for dashboards: income and expenses over a period, how the month
//! compares to the budget, a month-by-month expense trend and per-day net
//! spend.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

use crate::models::Transaction;

/// Income/expense totals over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodStats {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses
    pub balance: f64,
    pub transaction_count: usize,
}

impl PeriodStats {
    /// Sum up the given transactions
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut stats = Self::default();
        for txn in transactions {
            if txn.is_income() {
                stats.total_income += txn.amount;
            } else {
                stats.total_expenses += txn.amount;
            }
            stats.transaction_count += 1;
        }
        stats.balance = stats.total_income - stats.total_expenses;
        stats
    }
}

/// First and last instant of a calendar month, in UTC
///
/// Returns `None` for an invalid month.
pub fn month_bounds(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    let start = Utc.from_utc_datetime(&first.and_hms_opt(0, 0, 0)?);
    let end = Utc.from_utc_datetime(&next.and_hms_opt(0, 0, 0)?) - Duration::nanoseconds(1);
    Some((start, end))
}

/// Transactions dated within the given month
pub fn transactions_in_month(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> Vec<&Transaction> {
    match month_bounds(year, month) {
        Some((start, end)) => transactions
            .iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect(),
        None => Vec::new(),
    }
}

/// Stats for one calendar month
pub fn monthly_stats(transactions: &[Transaction], year: i32, month: u32) -> PeriodStats {
    PeriodStats::from_transactions(transactions_in_month(transactions, year, month))
}

/// How a month's spending compares to the budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    pub budget: f64,
    pub spent: f64,
    /// Budget left, never below zero
    pub remaining: f64,
    /// Income minus spending
    pub savings: f64,
    /// Share of the budget used, in percent; zero when no budget is set
    pub used_percent: f64,
}

impl BudgetStatus {
    pub fn compute(budget: f64, month: &PeriodStats) -> Self {
        let spent = month.total_expenses;
        let used_percent = if budget > 0.0 {
            spent / budget * 100.0
        } else {
            0.0
        };

        Self {
            budget,
            spent,
            remaining: (budget - spent).max(0.0),
            savings: month.total_income - spent,
            used_percent,
        }
    }

    /// Spending went past a non-zero budget
    pub fn is_over_budget(&self) -> bool {
        self.budget > 0.0 && self.spent > self.budget
    }
}

/// Expense total for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotal {
    pub year: i32,
    pub month: u32,
    /// Three-letter month name
    pub label: String,
    pub total: f64,
}

/// Expense totals for the `months` calendar months ending at `(year, month)`,
/// oldest first
pub fn monthly_expense_trend(
    transactions: &[Transaction],
    year: i32,
    month: u32,
    months: usize,
) -> Vec<MonthTotal> {
    let mut trend = Vec::with_capacity(months);
    let (mut y, mut m) = (year, month);

    for _ in 0..months {
        let Some((start, _)) = month_bounds(y, m) else {
            break;
        };
        let total = transactions_in_month(transactions, y, m)
            .into_iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        trend.push(MonthTotal {
            year: y,
            month: m,
            label: start.format("%b").to_string(),
            total,
        });

        (y, m) = if m == 1 { (y - 1, 12) } else { (y, m - 1) };
    }

    trend.reverse();
    trend
}

/// Net spend per day (expenses positive, income negative), sorted by day
pub fn daily_net_spend<'a, I>(transactions: I) -> Vec<(NaiveDate, f64)>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for txn in transactions {
        *days.entry(txn.date.date_naive()).or_insert(0.0) -= txn.signed_amount();
    }
    days.into_iter().collect()
}

/// The `n` most recent transactions, newest first
pub fn recent_transactions(transactions: &[Transaction], n: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

/// Distinct categories that appear on any transaction, sorted
pub fn categories_in_use(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|t| t.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Year and month of a timestamp
pub fn year_month(date: DateTime<Utc>) -> (i32, u32) {
    (date.year(), date.month())
}
