//! `GET /api/stores` — aggregated store search.

use std::str::FromStr;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use trendymap_kakao::{aggregate_stores, StoreQuery};

use super::{AppState, ErrorResponse};

/// Seoul City Hall, the fallback when the caller supplies no usable
/// coordinate.
const DEFAULT_LAT: f64 = 37.5665;
const DEFAULT_LNG: f64 = 126.9784;
const DEFAULT_RADIUS_M: u32 = 5000;

/// All params arrive as raw strings so malformed numbers degrade to
/// defaults instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub(super) struct StoresParams {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    lat: Option<String>,
    #[serde(default)]
    lng: Option<String>,
    #[serde(default)]
    radius: Option<String>,
}

pub(super) async fn list_stores(
    State(state): State<AppState>,
    Query(params): Query<StoresParams>,
) -> Response {
    let Some(query) = params.query.filter(|q| !q.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("query parameter is required")),
        )
            .into_response();
    };

    let store_query = StoreQuery {
        query,
        lat: parse_or(params.lat.as_deref(), DEFAULT_LAT),
        lng: parse_or(params.lng.as_deref(), DEFAULT_LNG),
        radius_m: parse_or(params.radius.as_deref(), DEFAULT_RADIUS_M),
    };

    let listing = aggregate_stores(&state.kakao, &store_query).await;
    (StatusCode::OK, Json(listing)).into_response()
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_accepts_valid_values() {
        assert!((parse_or(Some("37.5"), DEFAULT_LAT) - 37.5).abs() < f64::EPSILON);
        assert_eq!(parse_or(Some("1000"), DEFAULT_RADIUS_M), 1000);
    }

    #[test]
    fn parse_or_falls_back_on_garbage_or_absence() {
        assert!((parse_or(Some("abc"), DEFAULT_LAT) - DEFAULT_LAT).abs() < f64::EPSILON);
        assert!((parse_or(Some(""), DEFAULT_LNG) - DEFAULT_LNG).abs() < f64::EPSILON);
        assert_eq!(parse_or::<u32>(None, DEFAULT_RADIUS_M), DEFAULT_RADIUS_M);
    }
}
