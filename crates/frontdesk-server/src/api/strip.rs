//! `GET /api/v1/strip`: classifies the visitor behind this request and
//! returns the personalization strip, or `204 No Content` when there is no
//! usable signal.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use frontdesk_engine::{evaluate, parse_visit_count, RawSignals, StripRequest};
use serde::Deserialize;

use super::{ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

pub(super) const CITY_HEADER: &str = "x-visitor-city";
pub(super) const TRAVEL_MODE_HEADER: &str = "x-travel-mode";
pub(super) const TRAVEL_TIME_HEADER: &str = "x-travel-time";
pub(super) const TRAVEL_DISTANCE_HEADER: &str = "x-travel-distance";
pub(super) const VISIT_COOKIE: &str = "visit_count";

const VISIT_COOKIE_MAX_AGE_SECS: u32 = 365 * 24 * 60 * 60;

#[derive(Debug, Default, Deserialize)]
pub(super) struct StripQuery {
    service: Option<String>,
    suburb: Option<String>,
    emergency: Option<String>,
}

pub(super) async fn get_strip(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<StripQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Response {
    // A malformed query string degrades to no service context rather than
    // failing the page render.
    let query = match query {
        Ok(Query(query)) => query,
        Err(e) => {
            tracing::debug!(request_id = %req_id.0, error = %e, "ignoring malformed strip query");
            StripQuery::default()
        }
    };
    let visit_count = cookie_value(&headers, VISIT_COOKIE);
    let raw = RawSignals {
        city: header_value(&headers, CITY_HEADER),
        travel_mode: header_value(&headers, TRAVEL_MODE_HEADER),
        travel_time: header_value(&headers, TRAVEL_TIME_HEADER),
        travel_distance: header_value(&headers, TRAVEL_DISTANCE_HEADER),
        visit_count: visit_count.clone(),
        now: (state.clock)(),
    };
    let request = StripRequest {
        service_slug: query.service.unwrap_or_default(),
        suburb_slug: query.suburb.unwrap_or_default(),
        emergency: query.emergency.as_deref().is_some_and(parse_flag),
    };

    let visit_cookie = next_visit_cookie(visit_count.as_deref());
    let strip = evaluate(&raw, &request, &state.practice);

    let mut response = match strip {
        Some(strip) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: strip,
                meta: ResponseMeta::new(req_id.0),
            }),
        )
            .into_response(),
        None => {
            tracing::debug!(request_id = %req_id.0, "no visitor signal; strip suppressed");
            StatusCode::NO_CONTENT.into_response()
        }
    };

    if let Ok(val) = HeaderValue::from_str(&visit_cookie) {
        response.headers_mut().insert(header::SET_COOKIE, val);
    }
    response
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Finds a cookie by name in the `Cookie` header(s).
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().to_string())
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn next_visit_cookie(current: Option<&str>) -> String {
    let count = current
        .and_then(parse_visit_count)
        .unwrap_or(0)
        .saturating_add(1);
    format!("{VISIT_COOKIE}={count}; Path=/; Max-Age={VISIT_COOKIE_MAX_AGE_SECS}; SameSite=Lax")
}

#[cfg(test)]
#[path = "strip_test.rs"]
mod tests;
