use thiserror::Error;

/// Errors returned by the Kakao Local API client.
///
/// Only the structured search endpoints produce these; the place detail
/// fetch is best-effort and degrades to empty [`crate::HoursInfo`] instead
/// of erroring.
#[derive(Debug, Error)]
pub enum KakaoError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request URL could not be built.
    #[error("invalid URL \"{raw}\": {reason}")]
    InvalidUrl { raw: String, reason: String },
}

/// Errors from free-text location resolution.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Both the address stage and the keyword fallback came back empty.
    #[error("no location matched the query")]
    NotFound,

    /// A search call itself failed. Transport errors do not trigger the
    /// keyword fallback; only an empty-but-successful address response does.
    #[error(transparent)]
    Upstream(#[from] KakaoError),
}
