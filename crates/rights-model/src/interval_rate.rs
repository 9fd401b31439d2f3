//! Rates that may only be exercised once per interval.

use composite_parser::{parse_array, DecodeError, Fields, ScanInput};
use serde::Serialize;

use crate::interval::Interval;
use crate::rate::Rate;

/// "This much, every this long": a rate bound to a calendar interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalRate {
    #[serde(flatten)]
    pub rate: Rate,
    #[serde(rename = "per")]
    pub interval: Interval,
}

impl IntervalRate {
    /// Decode a single interval rate from its composite literal, e.g.
    /// `(1,"l","01:00:00")`.
    pub fn from_literal<'a>(input: impl Into<ScanInput<'a>>) -> Result<Self, DecodeError> {
        let text = input.into().as_text()?;
        let mut fields = Fields::parse(text, 3)?;

        let amount = fields.take_f64("amount")?;
        let unit = fields.take_str("unit")?;
        let per = fields.take_str("per")?;

        let interval =
            Interval::parse_pg(&per).map_err(|e| DecodeError::InvalidField {
                field: "per",
                message: e.to_string(),
            })?;

        Ok(Self {
            rate: Rate { amount, unit },
            interval,
        })
    }

    /// Decode an array-of-composite literal into its interval rates,
    /// preserving element order. A failing element fails the whole decode.
    pub fn parse_rate_array<'a>(
        input: impl Into<ScanInput<'a>>,
    ) -> Result<Vec<Self>, DecodeError> {
        let text = input.into().as_text()?;
        parse_array(text)?
            .iter()
            .map(|element| Self::from_literal(element.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_interval_rate() {
        let rate = IntervalRate::from_literal("(1,\"l\",\"01:00:00\")").unwrap();
        assert_eq!(rate.rate.amount, 1.0);
        assert_eq!(rate.rate.unit, "l");
        assert_eq!(rate.interval, Interval::new(0, 0, 3_600_000_000));
    }

    #[test]
    fn test_decode_rate_array_preserves_order() {
        let rates = IntervalRate::parse_rate_array(
            r#"{"(1,"l","01:00:00")","(2,"m³","1 day")"}"#,
        )
        .unwrap();

        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].rate.amount, 1.0);
        assert_eq!(rates[0].rate.unit, "l");
        assert_eq!(rates[1].rate.amount, 2.0);
        assert_eq!(rates[1].rate.unit, "m³");
        assert_eq!(rates[1].interval, Interval::new(0, 1, 0));
    }

    #[test]
    fn test_decode_escaped_wire_form() {
        let rates = IntervalRate::parse_rate_array(
            r#"{"(1,\"l\",\"01:00:00\")","(2,\"m³\",\"1 day\")"}"#,
        )
        .unwrap();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[1].rate.unit, "m³");
    }

    #[test]
    fn test_bad_element_fails_whole_array() {
        let err = IntervalRate::parse_rate_array(
            r#"{"(1,"l","01:00:00")","(nope,"l","1 day")"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidNumber { .. }));
    }

    #[test]
    fn test_unparseable_interval_names_field() {
        let err = IntervalRate::from_literal("(1,\"l\",\"eventually\")").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidField { field: "per", .. }
        ));
    }

    #[test]
    fn test_serializes_with_iso_interval() {
        let rate = IntervalRate::from_literal("(2,\"m³\",\"1 day\")").unwrap();
        let json = serde_json::to_value(&rate).unwrap();
        assert_eq!(json["amount"], 2.0);
        assert_eq!(json["unit"], "m³");
        assert_eq!(json["per"], "P1D");
    }
}
