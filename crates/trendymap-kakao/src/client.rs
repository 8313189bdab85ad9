//! HTTP client for the Kakao Local API and the place detail page.
//!
//! Wraps `reqwest` with Kakao-specific auth, URL building, and typed
//! response deserialization. The structured search endpoints propagate
//! failures; the place detail fetch is best-effort and never does.

use std::time::Duration;

use reqwest::{header, Client, Url};
use serde::de::DeserializeOwned;

use crate::error::KakaoError;
use crate::hours::parse_open_hours;
use crate::types::{
    AddressSearchResponse, HoursInfo, KeywordPage, KeywordSearchResponse, PlaceDetailResponse,
    PlaceDocument,
};

const DEFAULT_LOCAL_BASE_URL: &str = "https://dapi.kakao.com/";
const DEFAULT_PLACE_BASE_URL: &str = "https://place.map.kakao.com/";

/// The place detail page blocks non-browser clients; a browser `User-Agent`
/// is enough to get through.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Client for the Kakao Local API.
///
/// Holds two HTTP clients: the search client targets the structured REST
/// API with a `KakaoAK` credential header, and the detail client targets
/// the place detail page with a browser profile and a short timeout — that
/// surface is slower and far less reliable than the REST API.
///
/// Use [`KakaoClient::new`] for production or
/// [`KakaoClient::with_base_urls`] to point at a mock server in tests.
pub struct KakaoClient {
    client: Client,
    detail_client: Client,
    rest_key: String,
    local_base_url: Url,
    place_base_url: Url,
}

impl KakaoClient {
    /// Creates a client pointed at the production Kakao endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`KakaoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(rest_key: &str, detail_timeout_secs: u64) -> Result<Self, KakaoError> {
        Self::with_base_urls(
            rest_key,
            detail_timeout_secs,
            DEFAULT_LOCAL_BASE_URL,
            DEFAULT_PLACE_BASE_URL,
        )
    }

    /// Creates a client with custom base URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`KakaoError::Http`] if a `reqwest::Client` cannot be
    /// constructed, or [`KakaoError::InvalidUrl`] if a base URL does not
    /// parse.
    pub fn with_base_urls(
        rest_key: &str,
        detail_timeout_secs: u64,
        local_base_url: &str,
        place_base_url: &str,
    ) -> Result<Self, KakaoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        let detail_client = Client::builder()
            .timeout(Duration::from_secs(detail_timeout_secs))
            .user_agent(BROWSER_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            detail_client,
            rest_key: rest_key.to_owned(),
            local_base_url: parse_base_url(local_base_url)?,
            place_base_url: parse_base_url(place_base_url)?,
        })
    }

    /// Fetches one page of keyword search results around a coordinate.
    ///
    /// Results are sorted by accuracy; `is_end` on the returned page tells
    /// the caller whether issuing the next page is worthwhile.
    ///
    /// # Errors
    ///
    /// - [`KakaoError::Http`] on network or TLS failure.
    /// - [`KakaoError::UnexpectedStatus`] on a non-2xx response.
    /// - [`KakaoError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn search_keyword_page(
        &self,
        query: &str,
        lng: f64,
        lat: f64,
        radius_m: u32,
        page: u32,
        size: u32,
    ) -> Result<KeywordPage, KakaoError> {
        let url = self.local_url(
            "v2/local/search/keyword.json",
            &[
                ("query", query),
                ("x", &lng.to_string()),
                ("y", &lat.to_string()),
                ("radius", &radius_m.to_string()),
                ("size", &size.to_string()),
                ("page", &page.to_string()),
                ("sort", "accuracy"),
            ],
        );
        let context = format!("keyword search (query={query}, page={page})");
        let response: KeywordSearchResponse = self.get_local_json(url, &context).await?;
        Ok(KeywordPage {
            documents: response.documents,
            is_end: response.meta.is_end,
        })
    }

    /// Fetches the first keyword search match for a free-text query, with
    /// no viewport constraint. Used as the geocoding fallback stage.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search_keyword_page`].
    pub async fn search_keyword_first(
        &self,
        query: &str,
    ) -> Result<Option<PlaceDocument>, KakaoError> {
        let url = self.local_url(
            "v2/local/search/keyword.json",
            &[("query", query), ("size", "1")],
        );
        let context = format!("keyword lookup (query={query})");
        let response: KeywordSearchResponse = self.get_local_json(url, &context).await?;
        Ok(response.documents.into_iter().next())
    }

    /// Searches the address index for a free-text query.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search_keyword_page`].
    pub async fn search_address(
        &self,
        query: &str,
        size: u32,
    ) -> Result<Vec<PlaceDocument>, KakaoError> {
        let url = self.local_url(
            "v2/local/search/address.json",
            &[("query", query), ("size", &size.to_string())],
        );
        let context = format!("address search (query={query})");
        let response: AddressSearchResponse = self.get_local_json(url, &context).await?;
        Ok(response.documents)
    }

    /// Fetches opening hours for a place from the detail page.
    ///
    /// Never fails: any timeout, non-2xx status, or malformed body resolves
    /// to an empty [`HoursInfo`]. Hours enrichment is best-effort; search
    /// results are not allowed to die because one detail page was slow.
    pub async fn fetch_place_detail(&self, place_id: &str) -> HoursInfo {
        match self.try_fetch_place_detail(place_id).await {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!(place_id, error = %e, "place detail fetch failed, degrading to unknown hours");
                HoursInfo::default()
            }
        }
    }

    async fn try_fetch_place_detail(&self, place_id: &str) -> Result<HoursInfo, KakaoError> {
        let url = self
            .place_base_url
            .join(&format!("main/v/{place_id}"))
            .map_err(|e| KakaoError::InvalidUrl {
                raw: format!("main/v/{place_id}"),
                reason: e.to_string(),
            })?;

        let response = self.detail_client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(KakaoError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let detail: PlaceDetailResponse =
            serde_json::from_str(&body).map_err(|e| KakaoError::Deserialize {
                context: format!("place detail (id={place_id})"),
                source: e,
            })?;

        let open_hour = detail.basic_info.and_then(|b| b.open_hour);
        Ok(parse_open_hours(open_hour.as_ref()))
    }

    /// Builds a Local API URL with properly percent-encoded query parameters.
    fn local_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self
            .local_base_url
            .join(path)
            .unwrap_or_else(|_| self.local_base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends an authenticated GET, asserts a 2xx status, and parses the
    /// body as JSON.
    async fn get_local_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, KakaoError> {
        let response = self
            .client
            .get(url.clone())
            .header(header::AUTHORIZATION, format!("KakaoAK {}", self.rest_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(KakaoError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| KakaoError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// Normalises a base URL so that `Url::join` appends path segments instead
/// of replacing the last one.
fn parse_base_url(raw: &str) -> Result<Url, KakaoError> {
    let normalised = format!("{}/", raw.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| KakaoError::InvalidUrl {
        raw: raw.to_owned(),
        reason: e.to_string(),
    })
}
