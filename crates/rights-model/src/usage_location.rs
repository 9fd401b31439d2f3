//! Usage locations: the sites where a water right is exercised.

use serde::Serialize;
use water_common::Geometry;

use crate::date_range::DateRange;
use crate::interval_rate::IntervalRate;
use crate::keyed::NumericKeyedName;
use crate::rate::Rate;

/// A single usage location, owned by exactly one water right.
///
/// Every attribute beyond the identifiers is independently optional;
/// absence is a valid state, not an error. The `real` flag and the
/// geometry are deliberately excluded from serialization: the feature
/// assembler exposes the flag with inverted polarity (`isVirtual`) and
/// places the geometry on the feature itself.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLocation {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_right: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Stored polarity: "is this location physically real".
    #[serde(skip)]
    pub real: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_department: Option<String>,

    #[serde(rename = "legalPurposes", skip_serializing_if = "Option::is_none")]
    pub legal_purpose: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_scope: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipal_area: Option<NumericKeyedName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_association: Option<NumericKeyedName>,

    #[serde(rename = "euSurveyArea", skip_serializing_if = "Option::is_none")]
    pub eu_survey_area: Option<NumericKeyedName>,

    #[serde(rename = "basinNo", skip_serializing_if = "Option::is_none")]
    pub basin_number: Option<NumericKeyedName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_map_sheet: Option<NumericKeyedName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub groundwater_body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flood_area: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_protection_area: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub river_basin: Option<String>,

    #[serde(rename = "withdrawalRates", skip_serializing_if = "Vec::is_empty")]
    pub withdrawal_rates: Vec<IntervalRate>,

    #[serde(rename = "fluidDischargeRates", skip_serializing_if = "Vec::is_empty")]
    pub fluid_discharge: Vec<IntervalRate>,

    #[serde(rename = "rainSupplement", skip_serializing_if = "Vec::is_empty")]
    pub rain_supplement: Vec<IntervalRate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub irrigation_area: Option<Rate>,

    #[serde(rename = "validDuring", skip_serializing_if = "Option::is_none")]
    pub valid_during: Option<DateRange>,

    #[serde(skip)]
    pub geometry: Option<Geometry>,
}
