//! CLI command handlers
//!
//! Bridges clap argument parsing with the finance context. Each handler
//! takes the session's context by reference and prints to stdout.

pub mod budget;
pub mod investment;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, handle_reset, handle_theme, BudgetCommands};
pub use investment::{handle_investment_command, InvestmentCommands};
pub use report::{
    handle_categories, handle_dashboard, handle_export, handle_report, ReportArgs,
};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{InvestmentId, TransactionId};
use crate::services::FinanceContext;
use crate::storage::KeyValueStore;

/// Parse `YYYY-MM-DD` (start of that day, UTC) or a full RFC 3339 timestamp
pub fn parse_date(input: &str) -> FinanceResult<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(start_of_day(date));
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            FinanceError::InvalidInput(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                input
            ))
        })
}

/// Like [`parse_date`], but a bare date means the last instant of that day
pub fn parse_end_date(input: &str) -> FinanceResult<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(start_of_day(date) + Duration::days(1) - Duration::nanoseconds(1));
    }
    parse_date(trimmed)
}

/// Parse `YYYY-MM` into year and month
pub fn parse_month(input: &str) -> FinanceResult<(i32, u32)> {
    let invalid = || FinanceError::InvalidInput(format!("Invalid month: '{}'. Use YYYY-MM", input));

    let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}

/// Find a transaction id from a full id or a unique prefix
pub fn resolve_transaction_id<S: KeyValueStore>(
    ctx: &FinanceContext<S>,
    input: &str,
) -> FinanceResult<TransactionId> {
    let ids = ctx.transactions().iter().map(|t| &t.id);
    resolve_id(ids, input, "Transaction").map_err(|e| match e {
        FinanceError::NotFound { .. } => FinanceError::transaction_not_found(input),
        other => other,
    })
}

/// Find an investment id from a full id or a unique prefix
pub fn resolve_investment_id<S: KeyValueStore>(
    ctx: &FinanceContext<S>,
    input: &str,
) -> FinanceResult<InvestmentId> {
    let ids = ctx.investments().iter().map(|i| &i.id);
    resolve_id(ids, input, "Investment").map_err(|e| match e {
        FinanceError::NotFound { .. } => FinanceError::investment_not_found(input),
        other => other,
    })
}

fn resolve_id<'a, T, I>(ids: I, input: &str, entity_type: &'static str) -> FinanceResult<T>
where
    T: Clone + AsRef<str> + 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    let input = input.trim();
    if input.is_empty() {
        return Err(FinanceError::InvalidInput(format!("{} id is empty", entity_type)));
    }

    fn key<T: AsRef<str>>(id: &T) -> &str {
        id.as_ref()
    }

    if let Some(exact) = ids.clone().find(|id| key(*id) == input) {
        return Ok(exact.clone());
    }

    let matches: Vec<&T> = ids.filter(|id| key(*id).starts_with(input)).collect();
    match matches.as_slice() {
        [only] => Ok((*only).clone()),
        [] => Err(FinanceError::NotFound {
            entity_type,
            identifier: input.to_string(),
        }),
        many => Err(FinanceError::AmbiguousId {
            entity_type,
            prefix: input.to_string(),
            matches: many.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionDraft, TransactionType};
    use crate::storage::MemoryStore;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2025-01-15").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());

        let precise = parse_date("2025-01-15T10:30:00.250Z").unwrap();
        assert_eq!(precise.timestamp_subsec_millis(), 250);

        assert!(parse_date("15/01/2025").is_err());
    }

    #[test]
    fn test_parse_end_date() {
        let end = parse_end_date("2025-01-15").unwrap();
        assert!(end > Utc.with_ymd_and_hms(2025, 1, 15, 23, 59, 59).unwrap());
        assert!(end < Utc.with_ymd_and_hms(2025, 1, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-03").unwrap(), (2025, 3));
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("March").is_err());
    }

    #[test]
    fn test_resolve_transaction_id() {
        let mut ctx = FinanceContext::init(MemoryStore::new());
        let date = Utc::now();
        let a = ctx.add_transaction(TransactionDraft::new(
            TransactionType::Expense,
            1.0,
            "a",
            "x",
            date,
        ));

        assert_eq!(resolve_transaction_id(&ctx, a.as_str()).unwrap(), a);
        assert_eq!(resolve_transaction_id(&ctx, a.short()).unwrap(), a);

        let err = resolve_transaction_id(&ctx, "zzzz-not-an-id").unwrap_err();
        assert!(err.is_not_found());
        assert!(resolve_transaction_id(&ctx, "  ").is_err());
    }

    #[test]
    fn test_ambiguous_prefix() {
        let ids = vec![TransactionId::from("abc-1"), TransactionId::from("abc-2")];
        let err = resolve_id::<TransactionId, _>(ids.iter(), "abc", "Transaction").unwrap_err();
        assert!(matches!(err, FinanceError::AmbiguousId { matches: 2, .. }));

        let exact = resolve_id::<TransactionId, _>(ids.iter(), "abc-2", "Transaction").unwrap();
        assert_eq!(exact.as_str(), "abc-2");
    }
}
