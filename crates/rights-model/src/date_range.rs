//! Validity ranges decoded from PostgreSQL daterange output.

use chrono::{NaiveDate, NaiveDateTime};
use composite_parser::{DecodeError, ScanInput};
use serde::Serialize;

/// Sentinel for an unbounded lower bound (`-infinity`).
pub fn date_range_min() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(0, 1, 1)
        .expect("constant date")
        .and_hms_opt(0, 0, 0)
        .expect("constant time")
}

/// Sentinel for an unbounded upper bound (`infinity`).
pub fn date_range_max() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .expect("constant date")
        .and_hms_opt(23, 59, 59)
        .expect("constant time")
}

/// A validity window. Unbounded ends are represented by the fixed sentinel
/// dates rather than an option, so every range compares the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: NaiveDateTime,
    pub until: NaiveDateTime,
}

impl DateRange {
    /// The fully open range; also what the `empty` literal decodes to.
    pub fn unbounded() -> Self {
        Self {
            from: date_range_min(),
            until: date_range_max(),
        }
    }

    /// Decode a range literal such as `[2002-01-01,2030-12-31)`,
    /// `[2002-01-01,infinity)` or `[-infinity,)`.
    pub fn from_literal<'a>(input: impl Into<ScanInput<'a>>) -> Result<Self, DecodeError> {
        let text = input.into().as_text()?;
        let trimmed = text.trim();

        if trimmed == "empty" {
            return Ok(Self::unbounded());
        }

        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| DecodeError::UnexpectedShape {
                expected: "date range",
                got: trimmed.to_string(),
            })?;

        let (raw_from, raw_until) =
            inner
                .split_once(',')
                .ok_or_else(|| DecodeError::UnexpectedShape {
                    expected: "date range",
                    got: trimmed.to_string(),
                })?;

        let from = parse_bound(raw_from, "from", date_range_min())?;
        let until = parse_bound(raw_until, "until", date_range_max())?;

        if from > until {
            return Err(DecodeError::InvalidField {
                field: "until",
                message: format!("range bounds out of order: {} > {}", from, until),
            });
        }

        Ok(Self { from, until })
    }
}

/// Parse one bound; blank and infinity spellings map to the sentinel.
fn parse_bound(
    raw: &str,
    field: &'static str,
    sentinel: NaiveDateTime,
) -> Result<NaiveDateTime, DecodeError> {
    let raw = raw.trim().trim_matches('"');
    match raw {
        "" | "infinity" | "+infinity" | "-infinity" => Ok(sentinel),
        _ => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|date| date.and_hms_opt(0, 0, 0).expect("midnight"))
            .map_err(|e| DecodeError::InvalidField {
                field,
                message: e.to_string(),
            }),
    }
}
