//! Single water right details.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::Response;
use std::sync::Arc;

use rights_protocol::{FeatureCollection, WaterRightDetails};
use water_common::WaterError;

use crate::handlers::{json_response, problem_response};
use crate::state::AppState;

/// GET /water-rights/:water_right_number
///
/// Returns the current water right for a rights number together with its
/// usage locations embedded as a GeoJSON FeatureCollection.
pub async fn water_right_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(water_right_number): Path<String>,
) -> Response {
    metrics::counter!("water_rights_requests_total", "endpoint" => "water-rights")
        .increment(1);

    let trimmed = water_right_number.trim();
    if trimmed.is_empty() {
        return problem_response(&WaterError::MissingParameter(
            "water right number".to_string(),
        ));
    }

    let number: i64 = match trimmed.parse() {
        Ok(number) => number,
        Err(_) => {
            return problem_response(&WaterError::InvalidParameter {
                param: "water right number".to_string(),
                message: format!("'{}' is not a number", trimmed),
            })
        }
    };

    let right = match state.store.water_right_by_number(number).await {
        Ok(Some(right)) => right,
        Ok(None) => {
            return problem_response(&WaterError::WaterRightNotFound(trimmed.to_string()))
        }
        Err(err) => return problem_response(&err),
    };

    let locations = match state.store.usage_locations_for_right(right.id).await {
        Ok(locations) => locations,
        Err(err) => return problem_response(&err),
    };

    let collection = match FeatureCollection::from_usage_locations(locations) {
        Ok(collection) => collection,
        Err(err) => return problem_response(&err),
    };

    let details = WaterRightDetails {
        right,
        usage_locations: collection,
    };

    let body = match serde_json::to_string(&details) {
        Ok(body) => body,
        Err(err) => return problem_response(&err.into()),
    };

    json_response(StatusCode::OK, "application/json", body)
}
