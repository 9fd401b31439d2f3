//! Read-only PostgreSQL store for water rights and usage locations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use rights_model::{IntervalRate, UsageLocation, WaterRight};
use water_common::{Geometry, WaterError, WaterResult};

use crate::predicate::{self, FilterValue, LocationFilter};
use crate::rows::{LocationRow, RateSetRow, WaterRightRow};

/// Base select over usage locations. Composite columns are cast to their
/// text encodings and decoded in `rows`; the geometry travels as GeoJSON
/// text next to its SRID. No `WHERE` clause here, the predicate builder
/// appends one.
const USAGE_LOCATIONS_QUERY: &str = "SELECT \
     id::int8 AS id, water_right::int8 AS water_right, \"serial\", name, \
     active, \"real\", legal_department, legal_purpose, legal_scope, county, plot, \
     municipal_area::text AS municipal_area, \
     maintenance_association::text AS maintenance_association, \
     eu_survey_area::text AS eu_survey_area, \
     basin_no::text AS basin_no, \
     top_map_sheet::text AS top_map_sheet, \
     groundwater_body, water_body, flood_area, water_protection_area, \
     river_basin, \
     withdrawal_rates::text AS withdrawal_rates, \
     fluid_discharge::text AS fluid_discharge, \
     rain_supplement::text AS rain_supplement, \
     irrigation_area::text AS irrigation_area, \
     valid_during::text AS valid_during, \
     ST_AsGeoJSON(location) AS location, ST_SRID(location) AS srid \
     FROM nlwkn_water_rights.usage_locations";

/// Latest water right for a rights number.
const WATER_RIGHT_QUERY: &str = "SELECT \
     id::int8 AS id, water_right_number::int8 AS water_right_number, \
     external_identifier, file_reference, holder, legal_title, status, \
     subject, address, annotation, water_authority, registering_authority, \
     granting_authority, initially_granted, last_change, \
     valid::text AS valid, legal_departments \
     FROM nlwkn_water_rights.water_rights \
     WHERE water_right_number = $1 \
     ORDER BY id DESC LIMIT 1";

/// Withdrawal-rate sets of every rate-bearing location inside a geometry.
/// The request geometry arrives as WGS84 GeoJSON and is transformed to the
/// storage SRID for the containment test.
const WITHDRAWAL_RATES_QUERY: &str = "SELECT \
     withdrawal_rates::text AS withdrawal_rates \
     FROM nlwkn_water_rights.usage_locations \
     WHERE withdrawal_rates IS NOT NULL \
     AND ST_Contains(ST_Transform(ST_SetSRID(ST_GeomFromGeoJSON($1), 4326), 25832), location)";

/// Connection pool plus the read operations of the service.
pub struct RightsStore {
    pool: PgPool,
}

impl RightsStore {
    /// Create a new store connection from a database URL.
    pub async fn connect(database_url: &str) -> WaterResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| WaterError::database("connect", e))?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool, mostly useful in tests.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Usage locations matching the request filter.
    pub async fn usage_locations(
        &self,
        filter: &LocationFilter,
    ) -> WaterResult<Vec<UsageLocation>> {
        let composed = predicate::compose(USAGE_LOCATIONS_QUERY, filter);

        let mut query = sqlx::query_as::<_, LocationRow>(&composed.sql);
        for argument in &composed.arguments {
            query = match argument {
                FilterValue::Bool(value) => query.bind(*value),
                FilterValue::TextArray(values) => query.bind(values.clone()),
            };
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| WaterError::database("usage_locations", e))?;

        tracing::debug!(rows = rows.len(), "fetched usage locations");
        rows.into_iter().map(UsageLocation::try_from).collect()
    }

    /// The current water right for a rights number, or `None`.
    pub async fn water_right_by_number(
        &self,
        water_right_number: i64,
    ) -> WaterResult<Option<WaterRight>> {
        let row = sqlx::query_as::<_, WaterRightRow>(WATER_RIGHT_QUERY)
            .bind(water_right_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| WaterError::database("water_right_by_number", e))?;

        row.map(WaterRight::try_from).transpose()
    }

    /// All usage locations owned by a water right.
    pub async fn usage_locations_for_right(
        &self,
        water_right_id: i64,
    ) -> WaterResult<Vec<UsageLocation>> {
        let sql = format!("{} WHERE water_right = $1", USAGE_LOCATIONS_QUERY);

        let rows = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(water_right_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| WaterError::database("usage_locations_for_right", e))?;

        rows.into_iter().map(UsageLocation::try_from).collect()
    }

    /// Per-location withdrawal-rate sets inside a geometry.
    ///
    /// Each inner vector is the alternative rate set of one location; the
    /// caller folds those into min/max bounds.
    pub async fn withdrawal_rates_within(
        &self,
        geometry: &Geometry,
    ) -> WaterResult<Vec<Vec<IntervalRate>>> {
        let geojson = serde_json::to_string(geometry)
            .map_err(|e| WaterError::InternalError(format!("geometry encode: {}", e)))?;

        let rows = sqlx::query_as::<_, RateSetRow>(WITHDRAWAL_RATES_QUERY)
            .bind(geojson)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| WaterError::database("withdrawal_rates_within", e))?;

        tracing::debug!(locations = rows.len(), "fetched withdrawal rate sets");
        rows.into_iter().map(RateSetRow::into_rates).collect()
    }
}
