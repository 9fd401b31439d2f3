//! Water rights: the aggregate roots owning usage locations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::date_range::DateRange;

/// A granted water right.
///
/// Legal department codes stay opaque one-letter strings; their regulatory
/// meaning is not interpreted anywhere in this service.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterRight {
    /// Internal id issued by the store.
    pub id: i64,

    /// The rights number issued by the registering body.
    pub water_right_number: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_authority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registering_authority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub granting_authority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub initially_granted: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_change: Option<NaiveDate>,

    #[serde(rename = "valid", skip_serializing_if = "Option::is_none")]
    pub validity: Option<DateRange>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legal_departments: Vec<String>,
}
