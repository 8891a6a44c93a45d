//! Category breakdowns
//!
//! Totals per category with their share of the whole, largest first, and
//! amounts invested per calendar month.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::models::{Investment, Transaction};

use super::summary::MonthTotal;

/// Total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    /// Share of the grand total, in percent
    pub percent: f64,
    pub count: usize,
}

/// Spending per category, counting only expenses
pub fn expense_breakdown<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    breakdown(
        transactions
            .into_iter()
            .filter(|t| t.is_expense())
            .map(|t| (t.category.as_str(), t.amount)),
    )
}

/// Amount invested per category
pub fn investment_breakdown<'a, I>(investments: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Investment>,
{
    breakdown(
        investments
            .into_iter()
            .map(|i| (i.category.as_str(), i.amount)),
    )
}

/// Amount invested per calendar month, oldest first; months with nothing
/// invested are left out
pub fn monthly_investment_totals<'a, I>(investments: I) -> Vec<MonthTotal>
where
    I: IntoIterator<Item = &'a Investment>,
{
    let mut months: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for inv in investments {
        *months.entry((inv.date.year(), inv.date.month())).or_insert(0.0) += inv.amount;
    }

    months
        .into_iter()
        .map(|((year, month), total)| MonthTotal {
            year,
            month,
            label: NaiveDate::from_ymd_opt(year, month, 1)
                .map(|d| d.format("%b %Y").to_string())
                .unwrap_or_default(),
            total,
        })
        .collect()
}

fn breakdown<'a>(entries: impl Iterator<Item = (&'a str, f64)>) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for (category, amount) in entries {
        let entry = totals.entry(category).or_insert((0.0, 0));
        entry.0 += amount;
        entry.1 += 1;
    }

    let grand_total: f64 = totals.values().map(|(total, _)| total).sum();

    let mut rows: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            percent: if grand_total > 0.0 {
                total / grand_total * 100.0
            } else {
                0.0
            },
            count,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}
