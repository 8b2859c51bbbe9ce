//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::fetch::{detail_key, ListKey};
use crate::state::{AppState, Screen};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== List actions =====
        Action::ListFetch => {
            let effect = sync_list(state);
            match effect {
                Some(effect) => DispatchResult::changed_with(effect),
                None => DispatchResult::changed(),
            }
        }

        Action::ListDidLoad {
            limit,
            offset,
            page,
        } => {
            let key = ListKey { limit, offset };
            state.cache.finish(&key.cache_key());
            state.cache.insert_page(&key, page.clone());
            // The count is catalog-global; keep it fresh even for a page
            // the view has already navigated away from.
            state.pagination.total_count = page.count;
            // A shrunk count can strand the view past the last page.
            let last = state.pagination.total_pages().max(1);
            if state.pagination.current_page > last {
                state.pagination.current_page = last;
                state.selected_index = 0;
                return match sync_list(state) {
                    Some(effect) => DispatchResult::changed_with(effect),
                    None => DispatchResult::changed(),
                };
            }
            if key == state.current_list_key() {
                state.selected_index = state
                    .selected_index
                    .min(page.results.len().saturating_sub(1));
                state.list = DataResource::Loaded(page);
            }
            DispatchResult::changed()
        }

        Action::ListDidError {
            limit,
            offset,
            error,
        } => {
            let key = ListKey { limit, offset };
            state.cache.finish(&key.cache_key());
            if key == state.current_list_key() {
                state.list = DataResource::Failed(error);
            }
            DispatchResult::changed()
        }

        Action::ListSelect(index) => {
            let count = state
                .current_page()
                .map(|page| page.results.len())
                .unwrap_or(0);
            if index < count && index != state.selected_index {
                state.selected_index = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Page actions =====
        Action::PageSet(page) => set_page(state, page),
        Action::PageNext => set_page(state, state.pagination.current_page + 1),
        Action::PagePrev => set_page(state, state.pagination.current_page.saturating_sub(1)),
        Action::PageFirst => set_page(state, 1),
        Action::PageLast => set_page(state, state.pagination.total_pages().max(1)),

        // ===== Detail actions =====
        Action::DetailOpen(id) => {
            if state.screen.detail_id() == Some(id.as_str()) {
                return DispatchResult::unchanged();
            }
            state.screen = Screen::Detail { id: id.clone() };
            if let Some(detail) = state.cache.detail(&id) {
                state.detail = DataResource::Loaded(detail.clone());
                return DispatchResult::changed();
            }
            state.detail = DataResource::Loading;
            if state.cache.begin(detail_key(&id)) {
                DispatchResult::changed_with(Effect::FetchDetail { id })
            } else {
                DispatchResult::changed()
            }
        }

        Action::DetailDidLoad { id, detail } => {
            state.cache.finish(&detail_key(&id));
            state.cache.insert_detail(&id, detail.clone());
            // A consumer that already navigated away only feeds the cache.
            if state.screen.detail_id() == Some(id.as_str()) {
                state.detail = DataResource::Loaded(detail);
            }
            DispatchResult::changed()
        }

        Action::DetailDidError { id, error } => {
            state.cache.finish(&detail_key(&id));
            if state.screen.detail_id() == Some(id.as_str()) {
                state.detail = DataResource::Failed(error);
            }
            DispatchResult::changed()
        }

        // ===== Navigation =====
        Action::NavigateBack => {
            if state.screen == Screen::List {
                return DispatchResult::unchanged();
            }
            state.screen = Screen::List;
            state.detail = DataResource::Empty;
            DispatchResult::changed()
        }

        Action::Retry => match state.screen.clone() {
            Screen::List => {
                if !state.list.is_failed() {
                    return DispatchResult::unchanged();
                }
                match sync_list(state) {
                    Some(effect) => DispatchResult::changed_with(effect),
                    None => DispatchResult::changed(),
                }
            }
            Screen::Detail { id } => {
                if !state.detail.is_failed() {
                    return DispatchResult::unchanged();
                }
                state.detail = DataResource::Loading;
                if state.cache.begin(detail_key(&id)) {
                    DispatchResult::changed_with(Effect::FetchDetail { id })
                } else {
                    DispatchResult::changed()
                }
            }
        },

        // ===== Global actions =====
        Action::UiTerminalResize(width, height) => {
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Tick => {
            if state.loading_active() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Point the list at the page the pagination state wants: cached pages
/// apply synchronously, a missing page starts a fetch, and a page already
/// in flight just keeps the loading placeholder up.
fn sync_list(state: &mut AppState) -> Option<Effect> {
    let key = state.current_list_key();
    if let Some(page) = state.cache.page(&key) {
        let page = page.clone();
        state.pagination.total_count = page.count;
        state.selected_index = state
            .selected_index
            .min(page.results.len().saturating_sub(1));
        state.list = DataResource::Loaded(page);
        return None;
    }
    state.list = DataResource::Loading;
    if state.cache.begin(key.cache_key()) {
        Some(Effect::FetchList {
            limit: key.limit,
            offset: key.offset,
        })
    } else {
        None
    }
}

/// Absolute page change. Targets outside `[1, total_pages]` are rejected
/// outright; a landed change resets the card selection to the top.
fn set_page(state: &mut AppState, page: u32) -> DispatchResult<Effect> {
    if page == state.pagination.current_page || !state.pagination.is_valid_page(page) {
        return DispatchResult::unchanged();
    }
    state.pagination.current_page = page;
    state.selected_index = 0;
    match sync_list(state) {
        Some(effect) => DispatchResult::changed_with(effect),
        None => DispatchResult::changed(),
    }
}
