use ratatui::style::Color;

pub mod detail_view;
pub mod list_view;
pub mod pagination_bar;
pub mod placeholders;
pub mod stat_bar;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use detail_view::{DetailView, DetailViewProps};
pub use list_view::{ListView, ListViewProps};
pub use pagination_bar::{page_labels, pagination_line};
pub use placeholders::{render_error_notice, render_loading};
pub use stat_bar::stat_lines;

// Shared palette.
pub(crate) const BG_PANEL: Color = Color::Rgb(20, 32, 46);
pub(crate) const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
pub(crate) const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
pub(crate) const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);
pub(crate) const ACCENT_RED: Color = Color::Rgb(226, 106, 106);
