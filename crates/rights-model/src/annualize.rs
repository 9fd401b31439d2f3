//! Rate annualization: normalizing heterogeneous rate/interval pairs into
//! cubic meters per year.

use serde::Serialize;

use crate::interval::Interval;
use crate::interval_rate::IntervalRate;
use crate::rate::Rate;

pub const MICROS_PER_DAY: i64 = 86_400_000_000;
pub const MICROS_PER_MONTH: i64 = 30 * MICROS_PER_DAY;
pub const MICROS_PER_YEAR: i64 = 365 * MICROS_PER_DAY;

/// Extrapolate a rate over its interval to an amount per year, converted to
/// cubic meters.
///
/// Liter spellings are converted to cubic meters; cubic-meter spellings
/// pass through. Any other unit yields `0.0` without failing, the lenient
/// behavior downstream consumers rely on; a warning marks the occurrence so
/// such zeroes stay distinguishable from real ones in the logs.
pub fn annual_cubic_meters(rate: &Rate, interval: &Interval) -> f64 {
    let total_micros = interval.microseconds
        + interval.days as i64 * MICROS_PER_DAY
        + interval.months as i64 * MICROS_PER_MONTH;
    let year_fraction = total_micros as f64 / MICROS_PER_YEAR as f64;
    let annual_amount = rate.amount / year_fraction;

    match rate.unit.trim().to_lowercase().as_str() {
        "l" | "liter" | "litre" | "liters" | "litres" => annual_amount / 1000.0,
        "m³" | "m^3" | "m3" => annual_amount,
        other => {
            tracing::warn!(unit = other, "unknown rate unit, annualizing to zero");
            0.0
        }
    }
}

impl IntervalRate {
    /// Annualized value of this rate in cubic meters per year.
    pub fn annual_cubic_meters(&self) -> f64 {
        annual_cubic_meters(&self.rate, &self.interval)
    }
}

/// Running min/max bounds over annualized withdrawal amounts.
///
/// A location with several alternative rates contributes a range rather
/// than a single number: its smallest annualized rate extends the lower
/// bound and its largest the upper bound. A singleton set extends both
/// bounds by the same value. Bounds are summed across locations, never
/// averaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WithdrawalRange {
    #[serde(rename = "minimalWithdrawal")]
    pub min: f64,
    #[serde(rename = "maximalWithdrawal")]
    pub max: f64,
}

impl WithdrawalRange {
    /// Fold one location's annualized rate set into the running bounds.
    pub fn accumulate(&mut self, annualized: &[f64]) {
        let Some(first) = annualized.first() else {
            return;
        };

        let mut set_min = *first;
        let mut set_max = *first;
        for value in &annualized[1..] {
            set_min = set_min.min(*value);
            set_max = set_max.max(*value);
        }

        self.min += set_min;
        self.max += set_max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(amount: f64, unit: &str) -> Rate {
        Rate {
            amount,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_yearly_interval_is_identity() {
        let annual = annual_cubic_meters(&rate(365.0, "m³"), &Interval::new(0, 365, 0));
        assert!((annual - 365.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_rate_extrapolates() {
        let annual = annual_cubic_meters(&rate(1.0, "m³"), &Interval::new(0, 30, 0));
        assert!((annual - 365.0 / 30.0).abs() < 1e-9);
        assert!((annual - 12.17).abs() < 0.01);
    }

    #[test]
    fn test_liter_conversion() {
        let annual = annual_cubic_meters(&rate(1000.0, "l"), &Interval::new(0, 365, 0));
        assert!((annual - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_liter_spellings() {
        let interval = Interval::new(0, 365, 0);
        for unit in ["l", "L", "Liter", "litre", "LITERS"] {
            let annual = annual_cubic_meters(&rate(2000.0, unit), &interval);
            assert!((annual - 2.0).abs() < 1e-9, "unit {}", unit);
        }
    }

    #[test]
    fn test_cubic_meter_spellings() {
        let interval = Interval::new(0, 365, 0);
        for unit in ["m³", "m^3", "m3", "M3"] {
            let annual = annual_cubic_meters(&rate(7.0, unit), &interval);
            assert!((annual - 7.0).abs() < 1e-9, "unit {}", unit);
        }
    }

    #[test]
    fn test_unknown_unit_yields_zero() {
        let annual = annual_cubic_meters(&rate(7.0, "buckets"), &Interval::new(0, 1, 0));
        assert_eq!(annual, 0.0);
    }

    #[test]
    fn test_months_fold_as_thirty_days() {
        let per_month = annual_cubic_meters(&rate(1.0, "m³"), &Interval::new(1, 0, 0));
        let per_thirty_days = annual_cubic_meters(&rate(1.0, "m³"), &Interval::new(0, 30, 0));
        assert_eq!(per_month, per_thirty_days);
    }

    #[test]
    fn test_hourly_interval() {
        // 1 m³ per hour over a 365-day year.
        let annual =
            annual_cubic_meters(&rate(1.0, "m³"), &Interval::new(0, 0, 3_600_000_000));
        assert!((annual - 365.0 * 24.0).abs() < 1e-6);
    }

    #[test]
    fn test_range_singleton_extends_both_bounds() {
        let mut range = WithdrawalRange::default();
        range.accumulate(&[5.0]);
        assert_eq!(range.min, 5.0);
        assert_eq!(range.max, 5.0);
    }

    #[test]
    fn test_range_set_extends_min_and_max() {
        let mut range = WithdrawalRange::default();
        range.accumulate(&[5.0]);
        range.accumulate(&[1.0, 9.0, 3.0]);
        assert_eq!(range.min, 6.0);
        assert_eq!(range.max, 14.0);
    }

    #[test]
    fn test_range_empty_set_is_ignored() {
        let mut range = WithdrawalRange::default();
        range.accumulate(&[]);
        assert_eq!(range, WithdrawalRange::default());
    }
}
