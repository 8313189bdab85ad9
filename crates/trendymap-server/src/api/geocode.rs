//! `GET /api/geocode` — free-text location resolution.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use trendymap_kakao::{resolve_location, GeocodeError};

use super::{AppState, ErrorResponse};

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeParams {
    #[serde(default)]
    query: Option<String>,
}

pub(super) async fn resolve(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Response {
    let Some(query) = params.query.filter(|q| !q.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("query parameter is required")),
        )
            .into_response();
    };

    match resolve_location(&state.kakao, &query).await {
        Ok(resolved) => (StatusCode::OK, Json(resolved)).into_response(),
        Err(GeocodeError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("no location matched the query")),
        )
            .into_response(),
        Err(GeocodeError::Upstream(e)) => {
            tracing::error!(query = %query, error = %e, "geocode upstream call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("geocoding failed")),
            )
                .into_response()
        }
    }
}
