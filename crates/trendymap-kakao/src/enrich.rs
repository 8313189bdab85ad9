//! Concurrent opening-hours enrichment.

use futures::future;

use crate::client::KakaoClient;
use crate::types::{PlaceDocument, Store};

/// Attaches opening hours to each place and shapes the output records.
///
/// All detail fetches are issued concurrently with no throttling and the
/// call returns only once every one has settled; a failed fetch leaves
/// `hours`/`is_open` at `None` for that position without touching the
/// others. `join_all` keeps completion results in input order, so the
/// output has the same length and order as `documents` and ids are the
/// dense 1-based positions.
///
/// The unbounded fan-out is safe only because pagination caps the input at
/// `MAX_PAGES * PAGE_SIZE` (75) items; if that cap is ever lifted this
/// must become a bounded `buffer_unordered` pool.
pub async fn enrich_with_hours(client: &KakaoClient, documents: Vec<PlaceDocument>) -> Vec<Store> {
    let details = future::join_all(
        documents
            .iter()
            .map(|doc| client.fetch_place_detail(&doc.id)),
    )
    .await;

    documents
        .into_iter()
        .zip(details)
        .enumerate()
        .map(|(index, (doc, detail))| {
            let (lat, lng) = (doc.lat(), doc.lng());
            let addr = if doc.road_address_name.is_empty() {
                doc.address_name
            } else {
                doc.road_address_name
            };
            Store {
                id: index + 1,
                lat,
                lng,
                place_id: doc.id,
                name: doc.place_name,
                addr,
                phone: doc.phone,
                category: doc.category_name,
                kakao_url: doc.place_url,
                hours: detail.hours,
                is_open: detail.is_open,
            }
        })
        .collect()
}
