//! HTTP request handlers for the water-rights API.

pub mod health;
pub mod locations;
pub mod water_rights;
pub mod withdrawals;

use axum::http::{header, StatusCode};
use axum::response::Response;

use rights_protocol::Problem;
use water_common::WaterError;

/// Build the problem-detail response for a failed request.
pub(crate) fn problem_response(err: &WaterError) -> Response {
    if err.http_status_code() >= 500 {
        tracing::error!(error = %err, "request failed");
    }

    let problem = Problem::from(err);
    let json = serde_json::to_string(&problem).unwrap_or_default();

    Response::builder()
        .status(StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header(header::CONTENT_TYPE, "application/problem+json")
        .body(json.into())
        .unwrap()
}

/// Build a JSON success response.
pub(crate) fn json_response(status: StatusCode, content_type: &str, body: String) -> Response {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}
