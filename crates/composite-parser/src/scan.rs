//! Scan-source handling for values arriving from the database driver.

use crate::error::DecodeError;

/// A value handed to a decoder by the database layer.
///
/// Drivers surface composite columns either as raw bytes or as text; every
/// other source is rejected with [`DecodeError::UnsupportedInput`], as are
/// byte sequences that do not hold UTF-8 text.
#[derive(Debug, Clone, Copy)]
pub enum ScanInput<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> ScanInput<'a> {
    /// View the scan source as text.
    pub fn as_text(&self) -> Result<&'a str, DecodeError> {
        match self {
            ScanInput::Text(s) => Ok(s),
            ScanInput::Bytes(b) => {
                std::str::from_utf8(b).map_err(|_| DecodeError::UnsupportedInput)
            }
        }
    }
}

impl<'a> From<&'a str> for ScanInput<'a> {
    fn from(value: &'a str) -> Self {
        ScanInput::Text(value)
    }
}

impl<'a> From<&'a [u8]> for ScanInput<'a> {
    fn from(value: &'a [u8]) -> Self {
        ScanInput::Bytes(value)
    }
}
