//! Display helpers shared by the list and detail views.

use ratatui::style::Color;

/// Fallback color for categories outside the known set.
pub const DEFAULT_TYPE_COLOR: Color = Color::Rgb(156, 163, 175);

/// Default maximum for stat bars; base stats above it render as full.
pub const STAT_BAR_MAX: u16 = 200;

/// Pull the creature id out of a resource URL.
///
/// The upstream list endpoint always emits URLs with a trailing slash
/// (`.../pokemon/25/`), so the id is the second-to-last `/`-separated
/// piece. For a URL without the trailing slash this yields the preceding
/// path segment instead; the quirk is intentional and pinned by tests.
pub fn extract_id_from_url(url: &str) -> String {
    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() < 2 {
        return String::new();
    }
    parts[parts.len() - 2].to_string()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Pad an id for card display: "25" becomes "#025".
pub fn dex_number(id: &str) -> String {
    format!("#{id:0>3}")
}

/// Stat names come hyphenated from the wire ("special-attack").
pub fn stat_label(name: &str) -> String {
    capitalize_first(&name.replace('-', " "))
}

/// Bar fill percentage, clamped to 0..=100.
pub fn stat_percentage(value: u16, max: u16) -> u16 {
    if max == 0 {
        return 0;
    }
    ((value as u32 * 100) / max as u32).min(100) as u16
}

/// Height arrives in decimetres.
pub fn format_height(height: u16) -> String {
    format!("{:.1}m", height as f32 / 10.0)
}

/// Weight arrives in hectograms.
pub fn format_weight(weight: u16) -> String {
    format!("{:.1}kg", weight as f32 / 10.0)
}

/// Badge color per category. Unknown or empty categories share
/// [`DEFAULT_TYPE_COLOR`]; every defined category maps to its own color.
pub fn type_color(name: &str) -> Color {
    match name {
        "normal" => Color::Rgb(107, 114, 128),
        "fire" => Color::Rgb(239, 68, 68),
        "water" => Color::Rgb(59, 130, 246),
        "electric" => Color::Rgb(250, 204, 21),
        "grass" => Color::Rgb(34, 197, 94),
        "ice" => Color::Rgb(34, 211, 238),
        "fighting" => Color::Rgb(185, 28, 28),
        "poison" => Color::Rgb(168, 85, 247),
        "ground" => Color::Rgb(202, 138, 4),
        "flying" => Color::Rgb(129, 140, 248),
        "psychic" => Color::Rgb(236, 72, 153),
        "bug" => Color::Rgb(132, 204, 22),
        "rock" => Color::Rgb(133, 77, 14),
        "ghost" => Color::Rgb(126, 34, 206),
        "dragon" => Color::Rgb(67, 56, 202),
        "dark" => Color::Rgb(31, 41, 55),
        "steel" => Color::Rgb(148, 163, 184),
        "fairy" => Color::Rgb(249, 168, 212),
        _ => DEFAULT_TYPE_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id_with_trailing_slash() {
        assert_eq!(
            extract_id_from_url("https://pokeapi.co/api/v2/pokemon/25/"),
            "25"
        );
        assert_eq!(
            extract_id_from_url("https://pokeapi.co/api/v2/pokemon/150/"),
            "150"
        );
    }

    #[test]
    fn test_extract_id_without_trailing_slash_yields_prior_segment() {
        // Wire-compat quirk: no trailing slash means the id position is
        // occupied by the previous path component.
        assert_eq!(
            extract_id_from_url("https://pokeapi.co/api/v2/pokemon/1"),
            "pokemon"
        );
    }

    #[test]
    fn test_extract_id_degenerate_inputs() {
        assert_eq!(extract_id_from_url(""), "");
        assert_eq!(extract_id_from_url("abc"), "");
        assert_eq!(extract_id_from_url("/"), "");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first("pokemon"), "Pokemon");
        assert_eq!(capitalize_first("Pokemon"), "Pokemon");
        assert_eq!(capitalize_first("mr. mime"), "Mr. mime");
    }

    #[test]
    fn test_dex_number_padding() {
        assert_eq!(dex_number("1"), "#001");
        assert_eq!(dex_number("25"), "#025");
        assert_eq!(dex_number("150"), "#150");
        assert_eq!(dex_number("1302"), "#1302");
    }

    #[test]
    fn test_stat_label() {
        assert_eq!(stat_label("hp"), "Hp");
        assert_eq!(stat_label("special-attack"), "Special attack");
    }

    #[test]
    fn test_stat_percentage_clamps() {
        assert_eq!(stat_percentage(300, 100), 100);
        assert_eq!(stat_percentage(0, 100), 0);
        assert_eq!(stat_percentage(50, 100), 50);
        assert_eq!(stat_percentage(100, 200), 50);
        assert_eq!(stat_percentage(10, 0), 0);
    }

    #[test]
    fn test_type_color_known_categories() {
        assert_eq!(type_color("fire"), Color::Rgb(239, 68, 68));
        assert_eq!(type_color("water"), Color::Rgb(59, 130, 246));
        assert_eq!(type_color("grass"), Color::Rgb(34, 197, 94));
        assert_eq!(type_color("electric"), Color::Rgb(250, 204, 21));
    }

    #[test]
    fn test_type_color_defaults() {
        assert_eq!(type_color("unknown-type"), DEFAULT_TYPE_COLOR);
        assert_eq!(type_color(""), DEFAULT_TYPE_COLOR);
    }

    #[test]
    fn test_no_defined_category_uses_the_default_color() {
        let defined = [
            "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
            "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
        ];
        for name in defined {
            assert_ne!(type_color(name), DEFAULT_TYPE_COLOR, "{name}");
        }
    }

    #[test]
    fn test_measurements() {
        assert_eq!(format_height(7), "0.7m");
        assert_eq!(format_weight(69), "6.9kg");
        assert_eq!(format_height(17), "1.7m");
    }
}
