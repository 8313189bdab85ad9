//! Kakao Local API response types and the shaped output records.
//!
//! Wire types model the JSON returned by the keyword/address search
//! endpoints and the place detail page. Optional upstream fields are
//! defaulted once here via `#[serde(default)]` rather than patched up in
//! downstream logic.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Keyword / address search
// ---------------------------------------------------------------------------

/// Response envelope for `v2/local/search/keyword.json`.
#[derive(Debug, Deserialize)]
pub struct KeywordSearchResponse {
    #[serde(default)]
    pub documents: Vec<PlaceDocument>,
    #[serde(default)]
    pub meta: SearchMeta,
}

/// Pagination metadata attached to a keyword search response.
#[derive(Debug, Default, Deserialize)]
pub struct SearchMeta {
    /// `true` when this page is the last one the API will serve.
    #[serde(default)]
    pub is_end: bool,
}

/// Response envelope for `v2/local/search/address.json`.
#[derive(Debug, Deserialize)]
pub struct AddressSearchResponse {
    #[serde(default)]
    pub documents: Vec<PlaceDocument>,
}

/// A single place record from either search endpoint.
///
/// Kakao returns coordinates as strings (`x` = longitude, `y` = latitude);
/// they stay `String` here to match the actual wire format and are parsed
/// leniently when the output record is shaped.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDocument {
    pub id: String,
    pub place_name: String,
    #[serde(default)]
    pub road_address_name: String,
    #[serde(default)]
    pub address_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub place_url: String,
    #[serde(default)]
    pub x: String,
    #[serde(default)]
    pub y: String,
}

impl PlaceDocument {
    /// Latitude parsed from the upstream string field.
    #[must_use]
    pub fn lat(&self) -> f64 {
        parse_coord(&self.y)
    }

    /// Longitude parsed from the upstream string field.
    #[must_use]
    pub fn lng(&self) -> f64 {
        parse_coord(&self.x)
    }
}

/// Parses an upstream coordinate string, defaulting to `0.0` on garbage.
///
/// Bad coordinates are a data-quality problem in the provider's records,
/// not a reason to fail the whole response; they are logged and zeroed.
fn parse_coord(raw: &str) -> f64 {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(value = raw, "unparsable coordinate from upstream, defaulting to 0.0");
        0.0
    })
}

/// One page of keyword search results plus the end-of-results signal.
#[derive(Debug)]
pub struct KeywordPage {
    pub documents: Vec<PlaceDocument>,
    pub is_end: bool,
}

// ---------------------------------------------------------------------------
// Place detail (opening hours)
// ---------------------------------------------------------------------------

/// Response body of `place.map.kakao.com/main/v/{id}`. Everything in it is
/// optional; the page serves wildly different shapes per place.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetailResponse {
    #[serde(default)]
    pub basic_info: Option<BasicInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    #[serde(default)]
    pub open_hour: Option<OpenHour>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenHour {
    #[serde(default)]
    pub period_list: Vec<OpeningPeriod>,
    #[serde(default)]
    pub realtime: Option<RealtimeStatus>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningPeriod {
    #[serde(default)]
    pub time_list: Vec<TimeSlot>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(default)]
    pub day_of_week: String,
    #[serde(rename = "timeSE", default)]
    pub time_se: String,
    #[serde(default)]
    pub break_time: Option<String>,
}

/// Realtime open/closed flag: `"Y"`, `"N"`, or anything else (unknown).
#[derive(Debug, Default, Deserialize)]
pub struct RealtimeStatus {
    #[serde(default)]
    pub open: Option<String>,
}

// ---------------------------------------------------------------------------
// Shaped output
// ---------------------------------------------------------------------------

/// Opening-hours data extracted from a place detail fetch.
///
/// A failed or empty fetch yields the default (both `None`); callers cannot
/// distinguish "closed data missing" from "fetch failed", by contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoursInfo {
    pub hours: Option<String>,
    pub is_open: Option<bool>,
}

/// Input for a store search: search term plus map viewport.
#[derive(Debug, Clone)]
pub struct StoreQuery {
    pub query: String,
    pub lat: f64,
    pub lng: f64,
    pub radius_m: u32,
}

/// A venue as returned to the API caller, hours merged in.
#[derive(Debug, Clone, Serialize)]
pub struct Store {
    /// Dense 1-based sequence matching output order; request-scoped only.
    pub id: usize,
    #[serde(rename = "placeId")]
    pub place_id: String,
    pub name: String,
    pub addr: String,
    pub phone: String,
    pub category: String,
    #[serde(rename = "kakaoUrl")]
    pub kakao_url: String,
    pub lat: f64,
    pub lng: f64,
    pub hours: Option<String>,
    #[serde(rename = "isOpen")]
    pub is_open: Option<bool>,
}

/// The aggregated `/api/stores` response body.
#[derive(Debug, Serialize)]
pub struct StoreListing {
    pub total: usize,
    pub stores: Vec<Store>,
}

/// A resolved free-text location.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedLocation {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}
