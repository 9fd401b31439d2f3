//! Withdrawal range calculation over submitted geometries.

use axum::extract::rejection::JsonRejection;
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use futures::future::try_join_all;
use std::sync::Arc;

use rights_model::WithdrawalRange;
use water_common::{Geometry, WaterError};

use crate::handlers::{json_response, problem_response};
use crate::state::AppState;

/// POST /withdrawals
///
/// Body: a JSON array of GeoJSON geometries. For every geometry the
/// withdrawal-rate sets of the usage locations it contains are fetched
/// concurrently; the lookups are joined fail-fast, so the first failing
/// geometry aborts the request and its error is the one surfaced. The
/// annualized rates fold into a minimum/maximum bound pair.
pub async fn withdrawals_handler(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<Vec<Geometry>>, JsonRejection>,
) -> Response {
    metrics::counter!("water_rights_requests_total", "endpoint" => "withdrawals")
        .increment(1);

    let Json(geometries) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return problem_response(&WaterError::InvalidBody(rejection.body_text()))
        }
    };

    if geometries.is_empty() {
        return problem_response(&WaterError::InvalidBody(
            "expected at least one GeoJSON geometry".to_string(),
        ));
    }

    let lookups = geometries.into_iter().map(|geometry| {
        let store = Arc::clone(&state.store);
        async move { store.withdrawal_rates_within(&geometry).await }
    });

    let rate_sets = match try_join_all(lookups).await {
        Ok(per_geometry) => per_geometry,
        Err(err) => return problem_response(&err),
    };

    let mut range = WithdrawalRange::default();
    let mut rate_bearing_locations = 0usize;

    for rates in rate_sets.into_iter().flatten() {
        if rates.is_empty() {
            continue;
        }
        rate_bearing_locations += 1;

        let annualized: Vec<f64> = rates
            .iter()
            .map(|rate| rate.annual_cubic_meters())
            .collect();
        range.accumulate(&annualized);
    }

    if rate_bearing_locations == 0 {
        return problem_response(&WaterError::NoWithdrawalRates);
    }

    let body = match serde_json::to_string(&range) {
        Ok(body) => body,
        Err(err) => return problem_response(&err.into()),
    };

    json_response(StatusCode::OK, "application/json", body)
}
