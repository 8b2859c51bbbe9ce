//! Stat bars for the detail screen.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{ACCENT_TEAL, TEXT_DIM, TEXT_MAIN};
use crate::format::{stat_label, stat_percentage, STAT_BAR_MAX};
use crate::state::PokemonStat;

const BAR_WIDTH: u16 = 20;

/// One bar: padded label, value, then a filled/empty track. Values above
/// [`STAT_BAR_MAX`] render as a full bar.
pub fn stat_line(stat: &PokemonStat) -> Line<'static> {
    let percentage = stat_percentage(stat.value, STAT_BAR_MAX);
    let filled = (BAR_WIDTH as u32 * percentage as u32 / 100) as usize;
    let empty = BAR_WIDTH as usize - filled;

    Line::from(vec![
        Span::styled(
            format!("{:<16}", stat_label(&stat.name)),
            Style::default().fg(TEXT_MAIN),
        ),
        Span::styled(
            format!("{:>3} ", stat.value),
            Style::default().fg(TEXT_DIM),
        ),
        Span::styled(
            "█".repeat(filled),
            Style::default()
                .fg(ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("░".repeat(empty), Style::default().fg(TEXT_DIM)),
    ])
}

pub fn stat_lines(stats: &[PokemonStat]) -> Vec<Line<'static>> {
    stats.iter().map(stat_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_cells(line: &Line<'_>) -> (usize, usize) {
        let filled = line.spans[2].content.chars().count();
        let empty = line.spans[3].content.chars().count();
        (filled, empty)
    }

    #[test]
    fn test_full_bar_when_value_exceeds_max() {
        let line = stat_line(&PokemonStat {
            name: "attack".into(),
            value: 300,
        });
        assert_eq!(bar_cells(&line), (BAR_WIDTH as usize, 0));
    }

    #[test]
    fn test_empty_bar_at_zero() {
        let line = stat_line(&PokemonStat {
            name: "hp".into(),
            value: 0,
        });
        assert_eq!(bar_cells(&line), (0, BAR_WIDTH as usize));
    }

    #[test]
    fn test_half_bar() {
        let line = stat_line(&PokemonStat {
            name: "speed".into(),
            value: 100,
        });
        // 100 of 200 fills half the track.
        assert_eq!(bar_cells(&line), (10, 10));
    }

    #[test]
    fn test_label_is_humanized() {
        let line = stat_line(&PokemonStat {
            name: "special-attack".into(),
            value: 50,
        });
        assert!(line.spans[0].content.starts_with("Special attack"));
    }
}
