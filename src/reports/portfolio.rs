//! Investment portfolio valuation
//!
//! Estimates today's value of each investment by compounding its expected
//! annual return over the time since it was made.

use chrono::{DateTime, Utc};

use crate::models::Investment;

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

/// Totals across all investments
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PortfolioSummary {
    pub total_invested: f64,
    pub estimated_value: f64,
    /// Estimated value minus amount invested
    pub gain: f64,
    pub count: usize,
}

impl PortfolioSummary {
    /// Value every investment as of `now`
    pub fn compute(investments: &[Investment], now: DateTime<Utc>) -> Self {
        let total_invested: f64 = investments.iter().map(|i| i.amount).sum();
        let estimated: f64 = investments.iter().map(|i| estimated_value(i, now)).sum();

        Self {
            total_invested,
            estimated_value: estimated,
            gain: estimated - total_invested,
            count: investments.len(),
        }
    }
}

/// Years between the investment date and `now`; negative for future dates
pub fn years_invested(investment: &Investment, now: DateTime<Utc>) -> f64 {
    (now - investment.date).num_seconds() as f64 / SECONDS_PER_YEAR
}

/// `amount × (1 + r/100)^years`, or the face amount without an expected return
///
/// A rate of -100% or below is a total loss once any time has passed.
pub fn estimated_value(investment: &Investment, now: DateTime<Utc>) -> f64 {
    let rate = match investment.expected_return {
        Some(rate) if rate != 0.0 && rate.is_finite() => rate,
        _ => return investment.amount,
    };

    let growth = 1.0 + rate / 100.0;
    let years = years_invested(investment, now);
    if growth <= 0.0 {
        return if years > 0.0 { 0.0 } else { investment.amount };
    }

    investment.amount * growth.powf(years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvestmentDraft, InvestmentId};
    use chrono::{Duration, TimeZone};

    fn inv(amount: f64, rate: Option<f64>, date: DateTime<Utc>) -> Investment {
        let mut draft = InvestmentDraft::new(amount, "Mutual Funds", date);
        draft.expected_return = rate;
        draft.into_investment(InvestmentId::new())
    }

    #[test]
    fn test_one_year_compounding() {
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let now = start + Duration::days(365);
        let investment = inv(10000.0, Some(10.0), start);

        assert!((years_invested(&investment, now) - 1.0).abs() < 1e-12);
        assert!((estimated_value(&investment, now) - 11000.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_return_is_face_value() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(estimated_value(&inv(5000.0, None, start), now), 5000.0);
        assert_eq!(estimated_value(&inv(5000.0, Some(0.0), start), now), 5000.0);
    }

    #[test]
    fn test_summary() {
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let now = start + Duration::days(730);
        let list = vec![inv(10000.0, Some(10.0), start), inv(2000.0, None, start)];

        let summary = PortfolioSummary::compute(&list, now);
        assert_eq!(summary.total_invested, 12000.0);
        assert!((summary.estimated_value - 14100.0).abs() < 1e-6);
        assert!((summary.gain - 2100.0).abs() < 1e-6);
        assert_eq!(summary.count, 2);

        assert_eq!(PortfolioSummary::compute(&[], now), PortfolioSummary::default());
    }

    #[test]
    fn test_total_loss_rate_never_nan() {
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let now = start + Duration::days(500);
        let list = vec![inv(4000.0, Some(-150.0), start), inv(1000.0, Some(-100.0), start)];

        assert_eq!(estimated_value(&list[0], now), 0.0);
        assert_eq!(estimated_value(&list[1], now), 0.0);

        let summary = PortfolioSummary::compute(&list, now);
        assert_eq!(summary.estimated_value, 0.0);
        assert_eq!(summary.gain, -5000.0);
    }
}
