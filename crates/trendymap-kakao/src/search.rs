//! Paginated keyword search with accumulation and dedup.

use crate::client::KakaoClient;
use crate::dedup::dedup_by_key;
use crate::types::{PlaceDocument, StoreQuery};

/// Hard cap on paginated depth. Kakao caps keyword searches at 45 results
/// (3 pages of 15) for most queries, and the cap also protects against a
/// runaway fetch loop if `is_end` never arrives.
pub const MAX_PAGES: u32 = 5;

/// Fixed page size for keyword searches.
pub const PAGE_SIZE: u32 = 15;

/// Collects keyword search results across pages, deduplicated by place id
/// in first-seen order.
///
/// Pages are fetched strictly in order because early termination depends
/// on the previous page's `is_end` signal. A failed page aborts the loop
/// and keeps whatever was accumulated so far — partial results beat a dead
/// response here, unlike the geocode path, which propagates transport
/// errors.
pub async fn search_stores(client: &KakaoClient, query: &StoreQuery) -> Vec<PlaceDocument> {
    let mut collected: Vec<PlaceDocument> = Vec::new();

    for page in 1..=MAX_PAGES {
        match client
            .search_keyword_page(
                &query.query,
                query.lng,
                query.lat,
                query.radius_m,
                page,
                PAGE_SIZE,
            )
            .await
        {
            Ok(keyword_page) => {
                collected.extend(keyword_page.documents);
                if keyword_page.is_end {
                    break;
                }
            }
            Err(e) => {
                tracing::warn!(
                    query = %query.query,
                    page,
                    error = %e,
                    "keyword search page failed, returning partial results"
                );
                break;
            }
        }
    }

    dedup_by_key(collected, |doc| doc.id.clone())
}
