//! Detail screen for a single catalog entry.

use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::placeholders::{render_error_notice, render_loading};
use super::stat_bar::stat_lines;
use super::{Component, ACCENT_GOLD, ACCENT_TEAL, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::format::{capitalize_first, format_height, format_weight, type_color};
use crate::state::{AppState, PokemonDetail};

pub struct DetailViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Full record view, reached by opening a card on the list screen.
pub struct DetailView {
    status_bar: StatusBar,
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            status_bar: StatusBar::new(),
        }
    }

    fn type_badges(detail: &PokemonDetail) -> Line<'static> {
        let mut spans = vec![Span::styled("Types  ", Style::default().fg(TEXT_DIM))];
        for name in &detail.types {
            spans.push(Span::styled(
                format!(" {} ", capitalize_first(name)),
                Style::default()
                    .bg(type_color(name))
                    .fg(Color::Rgb(15, 23, 42))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn record_lines(detail: &PokemonDetail) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{}  #{:03}", detail.name.to_ascii_uppercase(), detail.id),
                Style::default()
                    .fg(ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::type_badges(detail),
            Line::from(""),
            Line::from(vec![
                Span::styled("Height ", Style::default().fg(TEXT_DIM)),
                Span::styled(format_height(detail.height), Style::default().fg(TEXT_MAIN)),
                Span::styled("   Weight ", Style::default().fg(TEXT_DIM)),
                Span::styled(format_weight(detail.weight), Style::default().fg(TEXT_MAIN)),
            ]),
        ];
        if let Some(xp) = detail.base_experience {
            lines.push(Line::from(vec![
                Span::styled("Base experience ", Style::default().fg(TEXT_DIM)),
                Span::styled(xp.to_string(), Style::default().fg(TEXT_MAIN)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Base stats",
            Style::default()
                .fg(ACCENT_GOLD)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(stat_lines(&detail.stats));
        // Official artwork first, plain front sprite as the fallback.
        if let Some(url) = detail.artwork_url.as_ref().or(detail.sprite_url.as_ref()) {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Artwork ", Style::default().fg(TEXT_DIM)),
                Span::styled(url.clone(), Style::default().fg(TEXT_DIM)),
            ]));
        }
        lines
    }

    fn render_record(frame: &mut Frame, area: Rect, detail: &PokemonDetail) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT_DIM))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(Self::record_lines(detail)), inner);
    }

    fn render_hints(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let hints: &[StatusBarHint<'static>] = if state.detail.is_failed() {
            &[
                StatusBarHint::new("r", "retry"),
                StatusBarHint::new("Esc", "back"),
                StatusBarHint::new("q", "quit"),
            ]
        } else {
            &[
                StatusBarHint::new("Esc/b", "back"),
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

impl Component<Action> for DetailView {
    type Props<'a> = DetailViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::NavigateBack),
            KeyCode::Char('r') if props.state.detail.is_failed() => Some(Action::Retry),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Breadcrumb
            Constraint::Min(3),    // Record or placeholder
            Constraint::Length(1), // Key hints
        ])
        .split(area);

        let state = props.state;
        let crumb = Line::from(vec![
            Span::styled("‹ Back", Style::default().fg(ACCENT_TEAL)),
            Span::styled("  Pokédex entry", Style::default().fg(TEXT_DIM)),
        ]);
        frame.render_widget(
            Paragraph::new(crumb).alignment(Alignment::Left),
            chunks[0],
        );

        if state.detail.is_loading() || state.detail.is_empty() {
            render_loading(frame, chunks[1], state.tick_count);
        } else if let Some(error) = state.detail.error() {
            render_error_notice(
                frame,
                chunks[1],
                error,
                "Press r to retry, or Esc to go back.",
            );
        } else if let Some(detail) = state.detail.data() {
            Self::render_record(frame, chunks[1], detail);
        }

        self.render_hints(frame, chunks[2], state);
    }
}
