//! End-to-end store aggregation: paginated search, then hours enrichment.

use crate::client::KakaoClient;
use crate::enrich::enrich_with_hours;
use crate::search::search_stores;
use crate::types::{StoreListing, StoreQuery};

/// Runs the full aggregation pipeline for one search request.
///
/// Upstream failures are already absorbed below this level: a dead search
/// page yields partial (possibly empty) results and a dead detail fetch
/// yields unknown hours, so the listing itself always materialises.
pub async fn aggregate_stores(client: &KakaoClient, query: &StoreQuery) -> StoreListing {
    let documents = search_stores(client, query).await;
    tracing::info!(
        query = %query.query,
        lat = query.lat,
        lng = query.lng,
        radius_m = query.radius_m,
        matches = documents.len(),
        "keyword search complete"
    );

    let stores = enrich_with_hours(client, documents).await;
    StoreListing {
        total: stores.len(),
        stores,
    }
}
