//! Free-text location resolution with an address→keyword fallback chain.

use crate::client::KakaoClient;
use crate::error::GeocodeError;
use crate::types::ResolvedLocation;

/// Resolves a place or address name to a coordinate.
///
/// Stage 1 queries the address index; a hit echoes the caller's query text
/// as the display name, since address search returns no display name of
/// its own. An empty-but-successful stage 1 falls back to a single-result
/// keyword lookup, whose hit carries the place name. Both stages empty is
/// [`GeocodeError::NotFound`].
///
/// This path is strict where paginated store search is lenient: a
/// transport error at either stage surfaces immediately as
/// [`GeocodeError::Upstream`] and never triggers the fallback.
///
/// # Errors
///
/// [`GeocodeError::NotFound`] when both stages come back empty;
/// [`GeocodeError::Upstream`] when a search call itself fails.
pub async fn resolve_location(
    client: &KakaoClient,
    query: &str,
) -> Result<ResolvedLocation, GeocodeError> {
    let address_matches = client.search_address(query, 1).await?;
    if let Some(doc) = address_matches.first() {
        return Ok(ResolvedLocation {
            lat: doc.lat(),
            lng: doc.lng(),
            name: query.to_owned(),
        });
    }

    tracing::debug!(query, "address search empty, falling back to keyword lookup");
    let Some(doc) = client.search_keyword_first(query).await? else {
        return Err(GeocodeError::NotFound);
    };

    Ok(ResolvedLocation {
        lat: doc.lat(),
        lng: doc.lng(),
        name: doc.place_name,
    })
}
