//! Decode error classification.

use thiserror::Error;

/// Errors raised while decoding composite text literals.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The scan source is neither a byte sequence holding UTF-8 text nor a
    /// string.
    #[error("unsupported scan input, only byte sequences and strings are supported")]
    UnsupportedInput,

    /// The literal does not carry the field count the target shape expects.
    #[error("malformed composite literal: expected {expected} fields, got {got}")]
    MalformedValue { expected: usize, got: usize },

    /// The literal does not match the outer grammar at all.
    #[error("expected a {expected} literal, got: {got}")]
    UnexpectedShape {
        expected: &'static str,
        got: String,
    },

    /// A numeric field failed to parse.
    #[error("unable to parse field '{field}' as a number")]
    InvalidNumber {
        field: &'static str,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// An integer field failed to parse.
    #[error("unable to parse field '{field}' as an integer")]
    InvalidInteger {
        field: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A field failed a domain-specific sub-parse (dates, intervals).
    #[error("unable to parse field '{field}': {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}
