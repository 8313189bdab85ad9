pub mod aggregate;
pub mod client;
pub mod dedup;
pub mod enrich;
pub mod error;
pub mod geocode;
pub mod hours;
pub mod search;
pub mod types;

pub use aggregate::aggregate_stores;
pub use client::KakaoClient;
pub use error::{GeocodeError, KakaoError};
pub use geocode::resolve_location;
pub use types::{
    HoursInfo, PlaceDocument, ResolvedLocation, Store, StoreListing, StoreQuery,
};
