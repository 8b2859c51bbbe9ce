//! Loading and error placeholders shared by both screens.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::{ACCENT_RED, ACCENT_TEAL, TEXT_DIM};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u32) -> &'static str {
    SPINNER_FRAMES[tick as usize % SPINNER_FRAMES.len()]
}

/// Centered spinner line while a fetch is pending.
pub fn render_loading(frame: &mut Frame, area: Rect, tick: u32) {
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick), Style::default().fg(ACCENT_TEAL)),
        Span::raw(" Loading..."),
    ]);
    let paragraph = Paragraph::new(centered_vertically(line, area))
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_DIM));
    frame.render_widget(paragraph, area);
}

/// Error placeholder with the retry affordance spelled out.
pub fn render_error_notice(frame: &mut Frame, area: Rect, message: &str, hint: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Oops! Something went wrong",
            Style::default()
                .fg(ACCENT_RED)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(TEXT_DIM))),
    ];
    let paragraph = Paragraph::new(centered_vertically_text(lines, area))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn centered_vertically(line: Line<'static>, area: Rect) -> Text<'static> {
    centered_vertically_text(vec![line], area)
}

fn centered_vertically_text(content: Vec<Line<'static>>, area: Rect) -> Text<'static> {
    let pad = (area.height as usize).saturating_sub(content.len()) / 2;
    let mut lines = vec![Line::from(""); pad];
    lines.extend(content);
    Text::from(lines)
}
