//! Pagination bar: prev/next arrows plus the page-button sequence.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{ACCENT_GOLD, TEXT_DIM, TEXT_MAIN};
use crate::pagination::{PageItem, Pagination};

pub const ELLIPSIS: &str = "…";

/// Textual page-button sequence, one label per slot.
pub fn page_labels(pagination: &Pagination) -> Vec<String> {
    pagination
        .page_items()
        .iter()
        .map(|item| match item {
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => ELLIPSIS.to_string(),
        })
        .collect()
}

pub fn pagination_line(pagination: &Pagination) -> Line<'static> {
    let arrow = |enabled: bool| {
        if enabled {
            Style::default().fg(TEXT_MAIN)
        } else {
            Style::default().fg(TEXT_DIM)
        }
    };

    let mut spans = vec![
        Span::styled("‹", arrow(pagination.has_prev())),
        Span::raw(" "),
    ];
    for item in pagination.page_items() {
        match item {
            PageItem::Page(n) if n == pagination.current_page => {
                spans.push(Span::styled(
                    format!("[{n}]"),
                    Style::default()
                        .fg(ACCENT_GOLD)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            PageItem::Page(n) => {
                spans.push(Span::styled(n.to_string(), Style::default().fg(TEXT_MAIN)));
            }
            PageItem::Ellipsis => {
                spans.push(Span::styled(ELLIPSIS, Style::default().fg(TEXT_DIM)));
            }
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("›", arrow(pagination.has_next())));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_first_page_of_large_catalog() {
        let pagination = Pagination {
            current_page: 1,
            total_count: 1302,
            ..Default::default()
        };
        assert_eq!(page_labels(&pagination), vec!["1", "2", "3", "…", "66"]);
    }

    #[test]
    fn test_labels_single_page() {
        let pagination = Pagination {
            current_page: 1,
            total_count: 5,
            ..Default::default()
        };
        assert_eq!(page_labels(&pagination), vec!["1"]);
    }

    #[test]
    fn test_line_highlights_current_page() {
        let pagination = Pagination {
            current_page: 33,
            total_count: 1302,
            ..Default::default()
        };
        let rendered: String = pagination_line(&pagination)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(rendered.contains("[33]"));
        assert!(rendered.starts_with('‹'));
        assert!(rendered.ends_with('›'));
    }
}
