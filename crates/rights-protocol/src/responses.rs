//! Problem-detail responses (RFC 7807 / RFC 9110) and composite response
//! documents.

use serde::{Deserialize, Serialize};

use rights_model::WaterRight;
use water_common::WaterError;

use crate::geojson::FeatureCollection;

/// A water right with its usage locations embedded as a feature collection.
#[derive(Debug, Clone, Serialize)]
pub struct WaterRightDetails {
    #[serde(flatten)]
    pub right: WaterRight,

    #[serde(rename = "usageLocations")]
    pub usage_locations: FeatureCollection,
}

/// A problem-detail document returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    /// Reference into RFC 9110's status code catalogue.
    #[serde(rename = "type")]
    pub type_: String,

    /// HTTP status code.
    pub status: u16,

    /// Short human-readable summary.
    pub title: String,

    /// Occurrence-specific explanation.
    pub detail: String,
}

impl Problem {
    pub fn new(status: u16, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_: format!(
                "https://www.rfc-editor.org/rfc/rfc9110#section-{}",
                rfc9110_section(status)
            ),
            status,
            title: title.into(),
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request", detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found", detail)
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::new(500, "Internal Server Error", detail)
    }
}

/// Section of RFC 9110 describing a status code.
fn rfc9110_section(status: u16) -> &'static str {
    match status {
        400 => "15.5.1",
        404 => "15.5.5",
        500 => "15.6.1",
        _ => "15",
    }
}

impl From<&WaterError> for Problem {
    fn from(err: &WaterError) -> Self {
        let status = err.http_status_code();
        let title = match err {
            WaterError::EmptyFilterValue(_) => "Empty Filter Value",
            WaterError::WaterRightNotFound(_) => "Unknown Water Right",
            WaterError::NoWithdrawalRates => "No Withdrawal Rates Available",
            WaterError::MissingParameter(_)
            | WaterError::InvalidParameter { .. }
            | WaterError::InvalidBody(_) => "Bad Request",
            _ => "Internal Server Error",
        };
        Self::new(status, title, err.to_string())
    }
}
