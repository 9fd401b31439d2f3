//! Usage location listing with optional filters.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::Response;
use axum_extra::extract::Query;
use serde::Deserialize;
use std::sync::Arc;

use rights_protocol::FeatureCollection;
use storage::LocationFilter;

use crate::handlers::{json_response, problem_response};
use crate::state::AppState;

/// Query parameters for the usage location listing.
///
/// An absent parameter leaves the corresponding filter inactive; `false`
/// is an active filter like any other value.
#[derive(Debug, Deserialize, Default)]
pub struct LocationsParams {
    /// Municipal area key prefixes, repeatable.
    #[serde(rename = "in")]
    pub area_keys: Option<Vec<String>>,

    /// Filter by active state.
    pub active: Option<bool>,

    /// Filter by reality state (stored polarity).
    pub real: Option<bool>,
}

/// GET /usage-locations
///
/// Returns the matching usage locations as a GeoJSON FeatureCollection
/// with an accumulated bounding box. No matches yield an empty collection.
pub async fn usage_locations_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<LocationsParams>,
) -> Response {
    metrics::counter!("water_rights_requests_total", "endpoint" => "usage-locations")
        .increment(1);

    let filter = LocationFilter {
        area_keys: params.area_keys,
        active: params.active,
        real: params.real,
    };

    if let Err(err) = filter.validate() {
        return problem_response(&err);
    }

    let collection = match state.store.usage_locations(&filter).await {
        Ok(locations) => match FeatureCollection::from_usage_locations(locations) {
            Ok(collection) => collection,
            Err(err) => return problem_response(&err),
        },
        Err(err) => return problem_response(&err),
    };

    let body = match serde_json::to_string(&collection) {
        Ok(body) => body,
        Err(err) => return problem_response(&err.into()),
    };

    json_response(StatusCode::OK, "application/geo+json", body)
}
