//! Amount helpers
//!
//! Amounts are plain `f64` magnitudes; the direction of money flow lives on
//! the record (`TransactionType`). Invalid numbers never get rejected, they
//! become zero.

/// Replace NaN and infinities with zero
pub fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}

/// Budget coercion: missing, non-finite or negative input becomes zero
pub fn sanitize_budget(amount: Option<f64>) -> f64 {
    match amount {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Parse user-entered text as an amount, falling back to zero
///
/// Accepts surrounding whitespace, a leading currency sign and thousands
/// separators ("₹1,250.50", " 40 ").
pub fn parse_amount(input: &str) -> f64 {
    let cleaned: String = input
        .trim()
        .trim_start_matches(['₹', '$'])
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    cleaned
        .trim()
        .parse::<f64>()
        .map(sanitize_amount)
        .unwrap_or(0.0)
}

/// Format an amount in rupees with Indian digit grouping ("₹1,23,456.78")
pub fn format_inr(amount: f64) -> String {
    let amount = sanitize_amount(amount);
    let fixed = format!("{:.2}", amount.abs());
    // sign only when something survives rounding
    let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = group_indian(whole);
    if negative {
        format!("-₹{}.{}", grouped, fraction)
    } else {
        format!("₹{}.{}", grouped, fraction)
    }
}

/// Last three digits form one group, every two digits before that another
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
