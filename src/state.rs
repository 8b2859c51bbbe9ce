//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::fetch::{FetchCache, ListKey};
use crate::pagination::Pagination;

/// Spinner timing for the loading placeholders.
pub const SPINNER_TICK_MS: u64 = 120;

/// One entry from the catalog list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListItem {
    pub name: String,
    /// Resource locator whose final path segment carries the id.
    pub url: String,
}

/// One decoded page of the catalog list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogPage {
    /// Total item count across the whole catalog.
    pub count: u32,
    pub results: Vec<ListItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PokemonStat {
    pub name: String,
    pub value: u16,
}

/// Full record for one creature, flattened from the nested wire shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub height: u16,
    pub weight: u16,
    pub base_experience: Option<u32>,
    pub artwork_url: Option<String>,
    pub sprite_url: Option<String>,
    pub types: Vec<String>,
    pub stats: Vec<PokemonStat>,
}

/// Which screen the top-level view is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Screen {
    #[default]
    List,
    Detail {
        id: String,
    },
}

impl Screen {
    pub fn detail_id(&self) -> Option<&str> {
        match self {
            Screen::List => None,
            Screen::Detail { id } => Some(id),
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Selected screen; list state survives a detail round trip.
    #[debug(section = "Navigation", label = "Screen", debug_fmt)]
    pub screen: Screen,

    /// Current page and last-known total count.
    #[debug(section = "Catalog", label = "Pagination", debug_fmt)]
    pub pagination: Pagination,

    /// Current page lifecycle: Empty, Loading, then Loaded or Failed.
    #[debug(section = "Catalog", label = "Page", debug_fmt)]
    pub list: DataResource<CatalogPage>,

    /// Card selection within the current page.
    #[debug(section = "Catalog", label = "Selected")]
    pub selected_index: usize,

    /// Detail lifecycle for the open record.
    #[debug(section = "Detail", label = "Record", debug_fmt)]
    pub detail: DataResource<PokemonDetail>,

    /// Memoized responses plus the in-flight key set.
    #[debug(skip)]
    pub cache: FetchCache,

    /// Spinner frame counter; only advances while something is loading.
    #[debug(skip)]
    pub tick_count: u32,

    #[debug(skip)]
    pub terminal_size: (u16, u16),
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::List,
            pagination: Pagination::default(),
            list: DataResource::Empty,
            selected_index: 0,
            detail: DataResource::Empty,
            cache: FetchCache::default(),
            tick_count: 0,
            terminal_size: (80, 24),
        }
    }
}

impl AppState {
    /// Cache key for the page the list view currently wants.
    pub fn current_list_key(&self) -> ListKey {
        ListKey {
            limit: self.pagination.per_page,
            offset: self.pagination.offset(),
        }
    }

    pub fn current_page(&self) -> Option<&CatalogPage> {
        self.list.data()
    }

    pub fn selected_item(&self) -> Option<&ListItem> {
        self.current_page()?.results.get(self.selected_index)
    }

    /// Whether any fetch the visible screen depends on is pending.
    pub fn loading_active(&self) -> bool {
        match &self.screen {
            Screen::List => self.list.is_loading(),
            Screen::Detail { .. } => self.detail.is_loading(),
        }
    }
}
