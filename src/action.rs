//! Actions with automatic category inference

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{CatalogPage, PokemonDetail};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== List category =====
    /// Intent: fetch the page the pagination state points at.
    ListFetch,

    /// Result: one catalog page decoded.
    ListDidLoad {
        limit: u32,
        offset: u32,
        page: CatalogPage,
    },

    /// Result: list fetch failed.
    ListDidError {
        limit: u32,
        offset: u32,
        error: String,
    },

    /// Move the card selection (from the list widget).
    ListSelect(usize),

    // ===== Page category =====
    /// Jump to an absolute page; out-of-range targets are rejected.
    PageSet(u32),
    PageNext,
    PagePrev,
    PageFirst,
    PageLast,

    // ===== Detail category =====
    /// Open the detail screen for an id derived from a resource URL.
    DetailOpen(String),

    /// Result: detail record decoded.
    DetailDidLoad { id: String, detail: PokemonDetail },

    /// Result: detail fetch failed.
    DetailDidError { id: String, error: String },

    // ===== Navigation =====
    /// Return to the list, keeping page and selection.
    NavigateBack,

    /// Re-issue the failed request for the visible screen.
    Retry,

    // ===== Uncategorized (global) =====
    UiTerminalResize(u16, u16),

    /// Spinner tick; re-renders only while a fetch is pending.
    Tick,

    Quit,
}
