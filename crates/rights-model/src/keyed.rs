//! Lookup-table references: a numeric key plus its display name.

use composite_parser::{DecodeError, Fields, ScanInput};
use serde::Serialize;

/// A numeric key with the name it resolves to, e.g. a municipal area code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumericKeyedName {
    pub key: i64,
    pub name: String,
}

impl NumericKeyedName {
    /// Decode from a composite literal, e.g. `(3241001,"Hannover")`.
    pub fn from_literal<'a>(input: impl Into<ScanInput<'a>>) -> Result<Self, DecodeError> {
        let text = input.into().as_text()?;
        let mut fields = Fields::parse(text, 2)?;
        Ok(Self {
            key: fields.take_i64("key")?,
            name: fields.take_str("name")?,
        })
    }
}
