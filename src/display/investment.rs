//! Investment display formatting

use chrono::{DateTime, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{format_inr, Investment};
use crate::reports::estimated_value;

#[derive(Tabled)]
struct InvestmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Invested")]
    invested: String,
    #[tabled(rename = "Return")]
    expected_return: String,
    #[tabled(rename = "Est. Value")]
    estimated: String,
}

/// Format investments as a table, valued as of `now`
pub fn format_investment_table(investments: &[Investment], now: DateTime<Utc>) -> String {
    if investments.is_empty() {
        return "No investments found.\n".to_string();
    }

    let rows: Vec<InvestmentRow> = investments
        .iter()
        .map(|inv| InvestmentRow {
            id: inv.id.short().to_string(),
            date: inv.date.format("%Y-%m-%d").to_string(),
            category: inv.category.clone(),
            invested: format_inr(inv.amount),
            expected_return: inv
                .expected_return
                .map(|r| format!("{}%", r))
                .unwrap_or_else(|| "-".to_string()),
            estimated: format_inr(estimated_value(inv, now)),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvestmentDraft, InvestmentId};
    use chrono::TimeZone;

    #[test]
    fn test_investment_table() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let list = vec![
            InvestmentDraft::new(10000.0, "Stocks", date)
                .with_expected_return(12.0)
                .into_investment(InvestmentId::new()),
            InvestmentDraft::new(500.0, "Gold", date).into_investment(InvestmentId::new()),
        ];

        let table = format_investment_table(&list, date);
        assert!(table.contains("Stocks"));
        assert!(table.contains("12%"));
        assert!(table.contains("₹10,000.00"));
        assert!(table.contains("-"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_investment_table(&[], Utc::now()), "No investments found.\n");
    }
}
