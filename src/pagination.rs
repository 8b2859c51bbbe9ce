//! Page-window arithmetic for the catalog list.
//!
//! The upstream API hands back `next`/`previous` cursors, but the
//! controller recomputes offsets from the page number so that any page is
//! reachable directly from the pagination bar.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed page size for catalog list requests.
pub const ITEMS_PER_PAGE: u32 = 20;

/// How many pages to show on each side of the current page.
const WINDOW_RADIUS: u32 = 2;

/// One slot in the rendered page-button sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Pagination state: current page plus the total count reported by the
/// last successful list response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Pagination {
    /// 1-based current page.
    pub current_page: u32,
    /// Total item count from the upstream catalog.
    pub total_count: u32,
    /// Items per page, fixed at [`ITEMS_PER_PAGE`].
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_count: 0,
            per_page: ITEMS_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Request offset for the current page.
    pub fn offset(&self) -> u32 {
        (self.current_page.saturating_sub(1)) * self.per_page
    }

    /// Ceiling of `total_count / per_page`; 0 for an empty catalog.
    pub fn total_pages(&self) -> u32 {
        self.total_count.div_ceil(self.per_page.max(1))
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Whether `page` is a navigable target. Out-of-range requests are
    /// rejected by the reducer, never clamped.
    pub fn is_valid_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages().max(1)
    }

    /// Page-button sequence: page 1 and the last page always appear, a
    /// contiguous window around the current page sits between them, and
    /// an ellipsis marks each gap the window does not bridge.
    pub fn page_items(&self) -> Vec<PageItem> {
        let total = self.total_pages();
        if total == 0 {
            return Vec::new();
        }
        if total == 1 {
            return vec![PageItem::Page(1)];
        }

        let low = self.current_page.saturating_sub(WINDOW_RADIUS).max(2);
        let high = (self.current_page + WINDOW_RADIUS).min(total - 1);

        let mut items = vec![PageItem::Page(1)];
        if low > 2 {
            items.push(PageItem::Ellipsis);
        }
        for page in low..=high {
            items.push(PageItem::Page(page));
        }
        if high < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total));
        items
    }
}
