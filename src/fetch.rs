//! Fetch memoization and request coalescing.
//!
//! The cache is an explicit object owned by [`AppState`], not ambient
//! process state: the reducer consults it before emitting a fetch effect,
//! records in-flight keys so identical requests coalesce into one task,
//! and stores settled responses keyed by their request parameters.
//!
//! [`AppState`]: crate::state::AppState

use std::collections::{HashMap, HashSet, VecDeque};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{CatalogPage, PokemonDetail};

/// List pages kept before the oldest insertion is evicted.
const PAGE_CACHE_CAP: usize = 32;

/// Cache key for a list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListKey {
    pub limit: u32,
    pub offset: u32,
}

impl ListKey {
    pub fn cache_key(&self) -> String {
        format!("list:{}:{}", self.limit, self.offset)
    }
}

/// Cache key for a detail request.
pub fn detail_key(id: &str) -> String {
    format!("pokemon:{id}")
}

/// Invalidation tags. `Catalog` covers every list page; `Item` covers one
/// detail record. There are no write operations upstream, so these only
/// fire from explicit invalidation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheTag {
    Catalog,
    Item(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FetchCache {
    pages: HashMap<String, CatalogPage>,
    /// Insertion order of page keys, oldest first.
    page_order: VecDeque<String>,
    details: HashMap<String, PokemonDetail>,
    /// Keys of requests currently pending. Runtime-only: a reloaded
    /// snapshot must start with no in-flight marks or it can never
    /// re-issue the fetch it was waiting on.
    #[serde(skip)]
    in_flight: HashSet<String>,
}

impl FetchCache {
    pub fn page(&self, key: &ListKey) -> Option<&CatalogPage> {
        self.pages.get(&key.cache_key())
    }

    pub fn insert_page(&mut self, key: &ListKey, page: CatalogPage) {
        let cache_key = key.cache_key();
        if self.pages.insert(cache_key.clone(), page).is_none() {
            self.page_order.push_back(cache_key);
        }
        while self.page_order.len() > PAGE_CACHE_CAP {
            if let Some(oldest) = self.page_order.pop_front() {
                self.pages.remove(&oldest);
            }
        }
    }

    pub fn detail(&self, id: &str) -> Option<&PokemonDetail> {
        self.details.get(&detail_key(id))
    }

    pub fn insert_detail(&mut self, id: &str, detail: PokemonDetail) {
        self.details.insert(detail_key(id), detail);
    }

    /// Mark a request as in flight. Returns false when the identical key
    /// is already pending, in which case no new task should be spawned.
    pub fn begin(&mut self, cache_key: String) -> bool {
        self.in_flight.insert(cache_key)
    }

    /// Clear the in-flight mark once a request settles, success or not.
    pub fn finish(&mut self, cache_key: &str) {
        self.in_flight.remove(cache_key);
    }

    pub fn is_in_flight(&self, cache_key: &str) -> bool {
        self.in_flight.contains(cache_key)
    }

    /// Drop every entry the tag covers. In-flight marks are untouched;
    /// a settling request re-inserts fresh data.
    pub fn invalidate(&mut self, tag: &CacheTag) {
        match tag {
            CacheTag::Catalog => {
                self.pages.clear();
                self.page_order.clear();
            }
            CacheTag::Item(id) => {
                self.details.remove(&detail_key(id));
            }
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn detail_count(&self) -> usize {
        self.details.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ListItem;

    fn page(count: u32) -> CatalogPage {
        CatalogPage {
            count,
            results: vec![ListItem {
                name: "bulbasaur".into(),
                url: "https://pokeapi.co/api/v2/pokemon/1/".into(),
            }],
        }
    }

    fn key(offset: u32) -> ListKey {
        ListKey { limit: 20, offset }
    }

    #[test]
    fn test_page_roundtrip() {
        let mut cache = FetchCache::default();
        assert!(cache.page(&key(0)).is_none());

        cache.insert_page(&key(0), page(1302));
        assert_eq!(cache.page(&key(0)).map(|p| p.count), Some(1302));
        // Distinct offsets are distinct keys.
        assert!(cache.page(&key(20)).is_none());
    }

    #[test]
    fn test_detail_roundtrip() {
        let mut cache = FetchCache::default();
        let detail = PokemonDetail {
            id: 25,
            name: "pikachu".into(),
            ..Default::default()
        };
        cache.insert_detail("25", detail.clone());
        assert_eq!(cache.detail("25"), Some(&detail));
        assert!(cache.detail("26").is_none());
    }

    #[test]
    fn test_begin_coalesces_identical_keys() {
        let mut cache = FetchCache::default();
        assert!(cache.begin(key(0).cache_key()));
        assert!(!cache.begin(key(0).cache_key()), "second begin must coalesce");
        assert!(cache.begin(key(20).cache_key()), "distinct keys are independent");

        cache.finish(&key(0).cache_key());
        assert!(!cache.is_in_flight(&key(0).cache_key()));
        assert!(cache.begin(key(0).cache_key()), "finished key can restart");
    }

    #[test]
    fn test_invalidate_catalog_clears_pages_only() {
        let mut cache = FetchCache::default();
        cache.insert_page(&key(0), page(1302));
        cache.insert_page(&key(20), page(1302));
        cache.insert_detail("1", PokemonDetail::default());

        cache.invalidate(&CacheTag::Catalog);
        assert_eq!(cache.page_count(), 0);
        assert_eq!(cache.detail_count(), 1);
    }

    #[test]
    fn test_invalidate_item_is_per_id() {
        let mut cache = FetchCache::default();
        cache.insert_detail("1", PokemonDetail::default());
        cache.insert_detail("2", PokemonDetail::default());

        cache.invalidate(&CacheTag::Item("1".into()));
        assert!(cache.detail("1").is_none());
        assert!(cache.detail("2").is_some());
    }

    #[test]
    fn test_page_eviction_drops_oldest() {
        let mut cache = FetchCache::default();
        for i in 0..=PAGE_CACHE_CAP as u32 {
            cache.insert_page(&key(i * 20), page(1302));
        }
        assert_eq!(cache.page_count(), PAGE_CACHE_CAP);
        assert!(cache.page(&key(0)).is_none(), "oldest page evicted");
        assert!(cache.page(&key(20)).is_some());
    }

    #[test]
    fn test_snapshot_drops_in_flight_marks() {
        let mut cache = FetchCache::default();
        cache.insert_page(&key(0), page(1302));
        assert!(cache.begin(key(20).cache_key()));

        let json = serde_json::to_string(&cache).unwrap();
        let mut reloaded: FetchCache = serde_json::from_str(&json).unwrap();

        assert_eq!(reloaded.page(&key(0)).map(|p| p.count), Some(1302));
        assert!(!reloaded.is_in_flight(&key(20).cache_key()));
        assert!(
            reloaded.begin(key(20).cache_key()),
            "reloaded cache can restart the pending fetch"
        );
    }

    #[test]
    fn test_reinsert_does_not_duplicate_order() {
        let mut cache = FetchCache::default();
        cache.insert_page(&key(0), page(1302));
        cache.insert_page(&key(0), page(1303));
        assert_eq!(cache.page_count(), 1);
        assert_eq!(cache.page(&key(0)).map(|p| p.count), Some(1303));
    }
}
