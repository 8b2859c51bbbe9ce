//! Catalog list screen: cards, pagination bar, placeholders.

use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps, SelectListStyle,
    SelectionStyle, StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::pagination_bar::pagination_line;
use super::placeholders::{render_error_notice, render_loading};
use super::{Component, ACCENT_TEAL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::format::{capitalize_first, dex_number, extract_id_from_url};
use crate::state::{AppState, CatalogPage};

const SELECTION_BG: Color = Color::Rgb(28, 92, 110);

pub struct ListViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The paginated catalog screen.
pub struct ListView {
    cards: SelectList,
    status_bar: StatusBar,
}

impl ListView {
    pub fn new() -> Self {
        Self {
            cards: SelectList::new(),
            status_bar: StatusBar::new(),
        }
    }

    fn card_items(page: &CatalogPage) -> Vec<Line<'static>> {
        page.results
            .iter()
            .map(|item| {
                let id = extract_id_from_url(&item.url);
                Line::from(vec![
                    Span::styled(
                        format!("{:>5} ", dex_number(&id)),
                        Style::default().fg(TEXT_DIM),
                    ),
                    Span::styled(capitalize_first(&item.name), Style::default().fg(TEXT_MAIN)),
                ])
            })
            .collect()
    }

    fn card_list_style() -> SelectListStyle {
        SelectListStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: None,
                fg: Some(TEXT_MAIN),
            },
            selection: SelectionStyle {
                style: Some(
                    Style::default()
                        .bg(SELECTION_BG)
                        .fg(TEXT_MAIN)
                        .add_modifier(Modifier::BOLD),
                ),
                marker: None,
                disabled: false,
            },
            ..SelectListStyle::default()
        }
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect, props: &ListViewProps<'_>) {
        let Some(page) = props.state.current_page() else {
            return;
        };
        let items = Self::card_items(page);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props
                .state
                .selected_index
                .min(items.len().saturating_sub(1)),
            is_focused: props.is_focused,
            style: Self::card_list_style(),
            behavior: SelectListBehavior {
                show_scrollbar: true,
                wrap_navigation: false,
            },
            on_select: Action::ListSelect,
            render_item: &|item| item.clone(),
        };
        self.cards.render(frame, area, list_props);
    }

    fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(page) = state.current_page() else {
            return;
        };
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);
        let showing = Line::from(Span::styled(
            format!("Showing {} of {}", page.results.len(), page.count),
            Style::default().fg(TEXT_DIM),
        ));
        frame.render_widget(
            Paragraph::new(showing).alignment(Alignment::Center),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(pagination_line(&state.pagination)).alignment(Alignment::Center),
            chunks[1],
        );
    }

    fn render_hints(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let hints: &[StatusBarHint<'static>] = if state.list.is_failed() {
            &[
                StatusBarHint::new("r", "retry"),
                StatusBarHint::new("q", "quit"),
            ]
        } else {
            &[
                StatusBarHint::new("↑/↓", "select"),
                StatusBarHint::new("←/→", "page"),
                StatusBarHint::new("g/G", "first/last"),
                StatusBarHint::new("Enter", "open"),
                StatusBarHint::new("q", "quit"),
            ]
        };
        <StatusBar as Component<Action>>::render(
            &mut self.status_bar,
            frame,
            area,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(hints),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

impl Component<Action> for ListView {
    type Props<'a> = ListViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        let state = props.state;

        if state.list.is_failed() {
            return match key.code {
                KeyCode::Char('r') | KeyCode::Enter => vec![Action::Retry],
                _ => Vec::new(),
            };
        }
        if !state.list.is_loaded() {
            return Vec::new();
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('[') => vec![Action::PagePrev],
            KeyCode::Right | KeyCode::Char(']') => vec![Action::PageNext],
            KeyCode::Home | KeyCode::Char('g') => vec![Action::PageFirst],
            KeyCode::End | KeyCode::Char('G') => vec![Action::PageLast],
            KeyCode::Enter => state
                .selected_item()
                .map(|item| vec![Action::DetailOpen(extract_id_from_url(&item.url))])
                .unwrap_or_default(),
            _ => {
                let Some(page) = state.current_page() else {
                    return Vec::new();
                };
                let items = Self::card_items(page);
                let list_props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: state.selected_index.min(items.len().saturating_sub(1)),
                    is_focused: true,
                    style: Self::card_list_style(),
                    behavior: SelectListBehavior {
                        show_scrollbar: true,
                        wrap_navigation: false,
                    },
                    on_select: Action::ListSelect,
                    render_item: &|item| item.clone(),
                };
                self.cards.handle_event(event, list_props).into_iter().collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(2), // Title
            Constraint::Min(3),    // Cards or placeholder
            Constraint::Length(2), // Showing + pagination
            Constraint::Length(1), // Key hints
        ])
        .split(area);

        let title = vec![
            Line::from(Span::styled(
                "POKÉDEX",
                Style::default()
                    .fg(ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Discover and learn about Pokemon! Open any entry for details.",
                Style::default().fg(TEXT_DIM),
            )),
        ];
        frame.render_widget(
            Paragraph::new(title).alignment(Alignment::Center),
            chunks[0],
        );

        let state = props.state;
        if state.list.is_loading() || state.list.is_empty() {
            render_loading(frame, chunks[1], state.tick_count);
        } else if let Some(error) = state.list.error() {
            render_error_notice(
                frame,
                chunks[1],
                error,
                "Press r to retry the list fetch.",
            );
        } else {
            self.render_cards(frame, chunks[1], &props);
            Self::render_footer(frame, chunks[2], state);
        }

        self.render_hints(frame, chunks[3], state);
    }
}
