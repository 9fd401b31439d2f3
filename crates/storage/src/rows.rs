//! Raw row shapes and their decoding into domain records.
//!
//! Composite columns arrive as text (the queries cast them with `::text`)
//! and are decoded here; a literal that fails to decode fails the whole
//! row, so no partially populated record ever leaves this module.

use chrono::NaiveDate;
use sqlx::FromRow;

use rights_model::{DateRange, IntervalRate, NumericKeyedName, Rate, UsageLocation, WaterRight};
use water_common::{Geometry, Shape, WaterError, WaterResult, SRID_STORAGE};

/// One `usage_locations` row as it comes off the wire.
#[derive(Debug, FromRow)]
pub struct LocationRow {
    pub id: i64,
    pub water_right: Option<i64>,
    pub serial: Option<String>,
    pub name: Option<String>,
    pub active: Option<bool>,
    pub real: Option<bool>,
    pub legal_department: Option<String>,
    pub legal_purpose: Option<Vec<String>>,
    pub legal_scope: Option<String>,
    pub county: Option<String>,
    pub plot: Option<String>,
    pub municipal_area: Option<String>,
    pub maintenance_association: Option<String>,
    pub eu_survey_area: Option<String>,
    pub basin_no: Option<String>,
    pub top_map_sheet: Option<String>,
    pub groundwater_body: Option<String>,
    pub water_body: Option<String>,
    pub flood_area: Option<String>,
    pub water_protection_area: Option<String>,
    pub river_basin: Option<String>,
    pub withdrawal_rates: Option<String>,
    pub fluid_discharge: Option<String>,
    pub rain_supplement: Option<String>,
    pub irrigation_area: Option<String>,
    pub valid_during: Option<String>,
    pub location: Option<String>,
    pub srid: Option<i32>,
}

impl TryFrom<LocationRow> for UsageLocation {
    type Error = WaterError;

    fn try_from(row: LocationRow) -> WaterResult<Self> {
        Ok(UsageLocation {
            id: row.id,
            water_right: row.water_right,
            serial: row.serial,
            name: row.name,
            active: row.active,
            real: row.real,
            legal_department: row.legal_department,
            legal_purpose: row.legal_purpose,
            legal_scope: row.legal_scope,
            county: row.county,
            plot: row.plot,
            municipal_area: decode_keyed(row.municipal_area, "municipal_area")?,
            maintenance_association: decode_keyed(
                row.maintenance_association,
                "maintenance_association",
            )?,
            eu_survey_area: decode_keyed(row.eu_survey_area, "eu_survey_area")?,
            basin_number: decode_keyed(row.basin_no, "basin_no")?,
            top_map_sheet: decode_keyed(row.top_map_sheet, "top_map_sheet")?,
            groundwater_body: row.groundwater_body,
            water_body: row.water_body,
            flood_area: row.flood_area,
            water_protection_area: row.water_protection_area,
            river_basin: row.river_basin,
            withdrawal_rates: decode_rate_array(row.withdrawal_rates, "withdrawal_rates")?,
            fluid_discharge: decode_rate_array(row.fluid_discharge, "fluid_discharge")?,
            rain_supplement: decode_rate_array(row.rain_supplement, "rain_supplement")?,
            irrigation_area: decode_rate(row.irrigation_area, "irrigation_area")?,
            valid_during: decode_date_range(row.valid_during, "valid_during")?,
            geometry: decode_geometry(row.location, row.srid)?,
        })
    }
}

/// One `water_rights` row as it comes off the wire.
#[derive(Debug, FromRow)]
pub struct WaterRightRow {
    pub id: i64,
    pub water_right_number: i64,
    pub external_identifier: Option<String>,
    pub file_reference: Option<String>,
    pub holder: Option<String>,
    pub legal_title: Option<String>,
    pub status: Option<String>,
    pub subject: Option<String>,
    pub address: Option<String>,
    pub annotation: Option<String>,
    pub water_authority: Option<String>,
    pub registering_authority: Option<String>,
    pub granting_authority: Option<String>,
    pub initially_granted: Option<NaiveDate>,
    pub last_change: Option<NaiveDate>,
    pub valid: Option<String>,
    pub legal_departments: Option<Vec<String>>,
}

impl TryFrom<WaterRightRow> for WaterRight {
    type Error = WaterError;

    fn try_from(row: WaterRightRow) -> WaterResult<Self> {
        Ok(WaterRight {
            id: row.id,
            water_right_number: row.water_right_number,
            external_identifier: row.external_identifier,
            file_reference: row.file_reference,
            holder: row.holder,
            legal_title: row.legal_title,
            status: row.status,
            subject: row.subject,
            address: row.address,
            annotation: row.annotation,
            water_authority: row.water_authority,
            registering_authority: row.registering_authority,
            granting_authority: row.granting_authority,
            initially_granted: row.initially_granted,
            last_change: row.last_change,
            validity: decode_date_range(row.valid, "valid")?,
            legal_departments: row.legal_departments.unwrap_or_default(),
        })
    }
}

/// One withdrawal-rate row: the rate set of a single location.
#[derive(Debug, FromRow)]
pub struct RateSetRow {
    pub withdrawal_rates: Option<String>,
}

impl RateSetRow {
    pub fn into_rates(self) -> WaterResult<Vec<IntervalRate>> {
        decode_rate_array(self.withdrawal_rates, "withdrawal_rates")
    }
}

fn decode_failure(column: &str, err: impl std::fmt::Display) -> WaterError {
    WaterError::DecodeFailure(format!("{}: {}", column, err))
}

fn decode_keyed(raw: Option<String>, column: &str) -> WaterResult<Option<NumericKeyedName>> {
    raw.map(|text| {
        NumericKeyedName::from_literal(text.as_str()).map_err(|e| decode_failure(column, e))
    })
    .transpose()
}

fn decode_rate(raw: Option<String>, column: &str) -> WaterResult<Option<Rate>> {
    raw.map(|text| Rate::from_literal(text.as_str()).map_err(|e| decode_failure(column, e)))
        .transpose()
}

fn decode_rate_array(raw: Option<String>, column: &str) -> WaterResult<Vec<IntervalRate>> {
    match raw {
        Some(text) => IntervalRate::parse_rate_array(text.as_str())
            .map_err(|e| decode_failure(column, e)),
        None => Ok(Vec::new()),
    }
}

fn decode_date_range(raw: Option<String>, column: &str) -> WaterResult<Option<DateRange>> {
    raw.map(|text| {
        DateRange::from_literal(text.as_str()).map_err(|e| decode_failure(column, e))
    })
    .transpose()
}

/// Decode the `ST_AsGeoJSON` text plus the `ST_SRID` column into a tagged
/// geometry. Rows without a geometry stay without one.
fn decode_geometry(raw: Option<String>, srid: Option<i32>) -> WaterResult<Option<Geometry>> {
    raw.map(|text| {
        let shape: Shape =
            serde_json::from_str(&text).map_err(|e| decode_failure("location", e))?;
        Ok(Geometry::new(srid.unwrap_or(SRID_STORAGE), shape))
    })
    .transpose()
}
