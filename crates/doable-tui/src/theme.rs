//! Palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Palette ───────────────────────────────────────────────────────────

pub const ACCENT: Color = Color::Rgb(122, 162, 247); // soft blue
pub const TEXT: Color = Color::Rgb(192, 202, 245); // near white
pub const MUTED: Color = Color::Rgb(86, 95, 137); // slate
pub const WARNING_YELLOW: Color = Color::Rgb(224, 175, 104);
pub const ERROR_RED: Color = Color::Rgb(247, 118, 142);
pub const BG_DIM: Color = Color::Rgb(26, 27, 38);

// ── Semantic styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Border for the panel holding input focus.
pub fn border_focused() -> Style {
    Style::default().fg(ACCENT)
}

/// Border for everything else.
pub fn border_default() -> Style {
    Style::default().fg(MUTED)
}

/// Normal list row text.
pub fn list_row() -> Style {
    Style::default().fg(TEXT)
}

/// The selected list row.
pub fn list_selected() -> Style {
    Style::default()
        .fg(ACCENT)
        .bg(BG_DIM)
        .add_modifier(Modifier::BOLD)
}

/// The delete control on a row.
pub fn delete_control() -> Style {
    Style::default().fg(ERROR_RED)
}

/// The empty-list placeholder text.
pub fn placeholder() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

/// Key hint text in the status line.
pub fn key_hint() -> Style {
    Style::default().fg(MUTED)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}
