//! Rate quantities: an amount and its free-text unit.

use composite_parser::{DecodeError, Fields, ScanInput};
use serde::Serialize;

/// An amount with a unit, e.g. `12.5 m³`.
///
/// The unit stays free text here; only the annualizer interprets it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rate {
    pub amount: f64,
    pub unit: String,
}

impl Rate {
    /// Decode a rate from its composite literal, e.g. `(12.5,"m³")`.
    pub fn from_literal<'a>(input: impl Into<ScanInput<'a>>) -> Result<Self, DecodeError> {
        let text = input.into().as_text()?;
        let mut fields = Fields::parse(text, 2)?;
        Ok(Self {
            amount: fields.take_f64("amount")?,
            unit: fields.take_str("unit")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rate_literal() {
        let rate = Rate::from_literal("(12.5,\"m³\")").unwrap();
        assert_eq!(rate.amount, 12.5);
        assert_eq!(rate.unit, "m³");
    }

    #[test]
    fn test_decode_from_bytes() {
        let bytes: &[u8] = "(2,\"l\")".as_bytes();
        let rate = Rate::from_literal(bytes).unwrap();
        assert_eq!(rate.amount, 2.0);
        assert_eq!(rate.unit, "l");
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        let err = Rate::from_literal("(12.5)").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedValue {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_bad_amount_names_field() {
        let err = Rate::from_literal("(twelve,\"m³\")").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidNumber { field: "amount", .. }
        ));
    }
}
