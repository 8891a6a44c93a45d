//! Domain serializer
//!
//! Converts domain values to and from the strings kept in the key-value
//! store. Encoding is plain JSON with RFC 3339 dates. Decoding never fails:
//! absent or malformed input turns into an empty list or a default value.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::FinanceResult;
use crate::models::{AppSettings, Investment, Transaction};

/// Encode the full transaction list
pub fn encode_transactions(list: &[Transaction]) -> FinanceResult<String> {
    Ok(serde_json::to_string(list)?)
}

/// Decode a transaction list; malformed records are dropped
pub fn decode_transactions(raw: Option<&str>) -> Vec<Transaction> {
    decode_records(raw, "transaction")
}

/// Encode the full investment list
pub fn encode_investments(list: &[Investment]) -> FinanceResult<String> {
    Ok(serde_json::to_string(list)?)
}

/// Decode an investment list; malformed records are dropped
pub fn decode_investments(raw: Option<&str>) -> Vec<Investment> {
    decode_records::<Investment>(raw, "investment")
        .into_iter()
        .map(Investment::sanitized)
        .collect()
}

/// Encode settings as a JSON object
pub fn encode_settings(settings: &AppSettings) -> FinanceResult<String> {
    Ok(serde_json::to_string(settings)?)
}

/// Decode settings, defaulting on absent or malformed input
pub fn decode_settings(raw: Option<&str>) -> AppSettings {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return AppSettings::default();
    };

    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(error = %e, "malformed settings in store, using defaults");
        AppSettings::default()
    })
}

/// Encode the budget as decimal text ("75000", "2.5")
pub fn encode_budget(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    format!("{}", amount)
}

/// Decode the budget; absent, empty or non-numeric text is zero
pub fn decode_budget(raw: Option<&str>) -> f64 {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return 0.0;
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(raw, "malformed budget in store, using 0");
            0.0
        }
    }
}

/// Decode a JSON array record by record so one bad entry can't hide the rest
fn decode_records<T: DeserializeOwned>(raw: Option<&str>, what: &str) -> Vec<T> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Vec::new();
    };

    let values: Vec<Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(error = %e, "malformed {} list in store, using empty list", what);
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "dropping malformed {} record", what);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        InvestmentDraft, InvestmentId, ThemeMode, TransactionDraft, TransactionId,
        TransactionType,
    };
    use chrono::{TimeZone, Utc};

    fn sample_transactions() -> Vec<Transaction> {
        let precise = Utc
            .with_ymd_and_hms(2025, 3, 4, 10, 11, 12)
            .unwrap()
            .checked_add_signed(chrono::Duration::nanoseconds(123_456_789))
            .unwrap();

        vec![
            TransactionDraft::new(
                TransactionType::Income,
                75000.0,
                "Monthly Salary",
                "Salary",
                precise,
            )
            .with_payment_method("netbanking")
            .with_notes("March")
            .into_transaction(TransactionId::new()),
            TransactionDraft::new(
                TransactionType::Expense,
                0.1 + 0.2,
                "Chai, \"special\"",
                "Food & Dining",
                Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap(),
            )
            .into_transaction(TransactionId::from("legacy-id-1")),
        ]
    }

    #[test]
    fn test_transactions_round_trip() {
        let list = sample_transactions();
        let encoded = encode_transactions(&list).unwrap();
        let decoded = decode_transactions(Some(&encoded));

        assert_eq!(decoded, list);
    }

    #[test]
    fn test_empty_list_round_trip() {
        let encoded = encode_transactions(&[]).unwrap();
        assert_eq!(encoded, "[]");
        assert!(decode_transactions(Some(&encoded)).is_empty());
    }

    #[test]
    fn test_decodes_millisecond_iso_dates() {
        let raw = r#"[{"id":"a","amount":2850,"description":"Grocery Shopping",
            "category":"Groceries","type":"expense","date":"2025-01-15T08:00:00.000Z",
            "paymentMethod":"upi"}]"#;
        let decoded = decode_transactions(Some(raw));

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].date, Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap());
        assert_eq!(decoded[0].payment_method.as_deref(), Some("upi"));
        assert_eq!(decoded[0].notes, None);
    }

    #[test]
    fn test_malformed_transactions_decode_empty() {
        assert!(decode_transactions(None).is_empty());
        assert!(decode_transactions(Some("")).is_empty());
        assert!(decode_transactions(Some("not json")).is_empty());
        assert!(decode_transactions(Some(r#"{"id":"x"}"#)).is_empty());
    }

    #[test]
    fn test_malformed_record_dropped() {
        let good = encode_transactions(&sample_transactions()[..1]).unwrap();
        let good_value: Value = serde_json::from_str(&good).unwrap();
        let raw =
            serde_json::json!([good_value[0].clone(), {"id": "bad", "amount": "lots"}]).to_string();

        let decoded = decode_transactions(Some(&raw));
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].description, "Monthly Salary");
    }

    #[test]
    fn test_investments_round_trip() {
        let list = vec![
            InvestmentDraft::new(
                10000.0,
                "Mutual Funds",
                Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
            )
            .with_expected_return(12.5)
            .with_notes("SIP")
            .into_investment(InvestmentId::new()),
            InvestmentDraft::new(2500.0, "Gold", Utc::now()).into_investment(InvestmentId::new()),
        ];

        let encoded = encode_investments(&list).unwrap();
        assert_eq!(decode_investments(Some(&encoded)), list);
        assert!(decode_investments(Some("[oops")).is_empty());
    }

    #[test]
    fn test_settings() {
        let dark = AppSettings { theme: ThemeMode::Dark };
        let encoded = encode_settings(&dark).unwrap();
        assert_eq!(encoded, r#"{"theme":"dark"}"#);
        assert_eq!(decode_settings(Some(&encoded)), dark);

        assert_eq!(decode_settings(None), AppSettings::default());
        assert_eq!(decode_settings(Some("{")), AppSettings::default());
        assert_eq!(decode_settings(Some(r#"{"theme":"neon"}"#)), AppSettings::default());
        assert_eq!(decode_settings(Some("{}")).theme, ThemeMode::Light);
    }

    #[test]
    fn test_budget() {
        assert_eq!(encode_budget(75000.0), "75000");
        assert_eq!(encode_budget(2.5), "2.5");
        assert_eq!(encode_budget(f64::NAN), "0");

        assert_eq!(decode_budget(Some("75000")), 75000.0);
        assert_eq!(decode_budget(Some(" 2.5 ")), 2.5);
        assert_eq!(decode_budget(Some("")), 0.0);
        assert_eq!(decode_budget(Some("NaN")), 0.0);
        assert_eq!(decode_budget(Some("abc")), 0.0);
        assert_eq!(decode_budget(None), 0.0);
    }
}
