//! Calendar intervals in PostgreSQL's three-component form.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A calendar-style duration: months and days carry no fixed length in
/// microseconds until annualization folds them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interval {
    pub months: i32,
    pub days: i32,
    pub microseconds: i64,
}

/// Failure to parse PostgreSQL interval output text.
#[derive(Debug, Error)]
#[error("invalid interval text '{text}': {message}")]
pub struct IntervalParseError {
    pub text: String,
    pub message: String,
}

impl Interval {
    pub fn new(months: i32, days: i32, microseconds: i64) -> Self {
        Self {
            months,
            days,
            microseconds,
        }
    }

    /// Parse PostgreSQL interval output, e.g. `01:00:00`, `1 day`,
    /// `2 years 3 mons 4 days 05:06:07.5`.
    pub fn parse_pg(text: &str) -> Result<Self, IntervalParseError> {
        let fail = |message: &str| IntervalParseError {
            text: text.to_string(),
            message: message.to_string(),
        };

        let mut interval = Interval::default();
        let mut tokens = text.split_whitespace().peekable();
        let mut saw_component = false;

        while let Some(token) = tokens.next() {
            if token.contains(':') {
                interval.microseconds = parse_clock(token).map_err(|m| fail(&m))?;
                saw_component = true;
                continue;
            }

            let quantity: i64 = token
                .parse()
                .map_err(|_| fail(&format!("unexpected token '{}'", token)))?;
            let unit = tokens
                .next()
                .ok_or_else(|| fail("quantity without a unit"))?;

            match unit.trim_end_matches('s') {
                "year" | "yr" => interval.months += quantity as i32 * 12,
                "mon" | "month" => interval.months += quantity as i32,
                "day" => interval.days += quantity as i32,
                "week" => interval.days += quantity as i32 * 7,
                "hour" => interval.microseconds += quantity * 3_600_000_000,
                "min" | "minute" => interval.microseconds += quantity * 60_000_000,
                "sec" | "second" => interval.microseconds += quantity * 1_000_000,
                other => return Err(fail(&format!("unknown unit '{}'", other))),
            }
            saw_component = true;
        }

        if !saw_component {
            return Err(fail("empty interval"));
        }
        Ok(interval)
    }

    /// ISO 8601 duration rendering, e.g. `P1Y2M3DT4H5M6S`.
    pub fn to_iso8601(&self) -> String {
        let years = self.months / 12;
        let months = self.months % 12;

        let mut out = String::from("P");
        if years != 0 {
            out.push_str(&format!("{}Y", years));
        }
        if months != 0 {
            out.push_str(&format!("{}M", months));
        }
        if self.days != 0 {
            out.push_str(&format!("{}D", self.days));
        }

        if self.microseconds != 0 {
            out.push('T');
            let total_seconds = self.microseconds / 1_000_000;
            let micros = self.microseconds % 1_000_000;
            let hours = total_seconds / 3600;
            let minutes = (total_seconds % 3600) / 60;
            let seconds = total_seconds % 60;
            if hours != 0 {
                out.push_str(&format!("{}H", hours));
            }
            if minutes != 0 {
                out.push_str(&format!("{}M", minutes));
            }
            if seconds != 0 || micros != 0 {
                if micros != 0 {
                    out.push_str(&format!("{}S", seconds as f64 + micros as f64 / 1e6));
                } else {
                    out.push_str(&format!("{}S", seconds));
                }
            }
        }

        if out == "P" {
            out.push_str("T0S");
        }
        out
    }
}

/// Parse a `HH:MM:SS[.ffffff]` clock section into microseconds.
fn parse_clock(token: &str) -> Result<i64, String> {
    let (negative, token) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let parts: Vec<&str> = token.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("expected HH:MM:SS, got '{}'", token));
    }

    let hours: i64 = parts[0]
        .parse()
        .map_err(|_| format!("bad hours in '{}'", token))?;
    let minutes: i64 = parts[1]
        .parse()
        .map_err(|_| format!("bad minutes in '{}'", token))?;
    let seconds: f64 = parts[2]
        .parse()
        .map_err(|_| format!("bad seconds in '{}'", token))?;

    let micros =
        hours * 3_600_000_000 + minutes * 60_000_000 + (seconds * 1e6).round() as i64;
    Ok(if negative { -micros } else { micros })
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_form() {
        let interval = Interval::parse_pg("01:00:00").unwrap();
        assert_eq!(interval, Interval::new(0, 0, 3_600_000_000));
    }

    #[test]
    fn test_parse_single_day() {
        let interval = Interval::parse_pg("1 day").unwrap();
        assert_eq!(interval, Interval::new(0, 1, 0));
    }

    #[test]
    fn test_parse_combined_form() {
        let interval = Interval::parse_pg("2 years 3 mons 4 days 05:06:07").unwrap();
        assert_eq!(interval.months, 27);
        assert_eq!(interval.days, 4);
        assert_eq!(
            interval.microseconds,
            5 * 3_600_000_000 + 6 * 60_000_000 + 7 * 1_000_000
        );
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let interval = Interval::parse_pg("00:00:00.5").unwrap();
        assert_eq!(interval.microseconds, 500_000);
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(Interval::parse_pg("soon").is_err());
        assert!(Interval::parse_pg("").is_err());
        assert!(Interval::parse_pg("3").is_err());
    }

    #[test]
    fn test_iso8601_rendering() {
        assert_eq!(Interval::new(14, 3, 0).to_iso8601(), "P1Y2M3D");
        assert_eq!(Interval::new(0, 0, 3_600_000_000).to_iso8601(), "PT1H");
        assert_eq!(Interval::default().to_iso8601(), "PT0S");
        assert_eq!(
            Interval::new(0, 1, 1_500_000).to_iso8601(),
            "P1DT1.5S"
        );
    }
}
