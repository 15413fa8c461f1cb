//! Theme and styling for the Folio TUI.
//!
//! Mango palette matching the site's branding: a warm orange accent over a
//! dark background, with gold used for secondary highlights.

use ratatui::style::{Color, Modifier, Style};

/// Mango orange accent (#fb641b) for highlights and focus indicators.
pub const ACCENT: Color = Color::Rgb(251, 100, 27);

/// Gold secondary accent (#fbbf24).
pub const GOLD: Color = Color::Rgb(251, 191, 36);

/// Primary foreground color for normal text.
pub const FG: Color = Color::Rgb(228, 224, 218);

/// Muted foreground for hints, captions, and secondary information.
pub const FG_MUTED: Color = Color::Rgb(168, 160, 152);

/// Default border color for unfocused elements.
pub const BORDER: Color = Color::Rgb(80, 68, 60);

/// Focused border color.
pub const BORDER_FOCUS: Color = ACCENT;

/// Warning color for error notices and validation failures.
pub const WARN: Color = Color::Rgb(220, 96, 96);

/// Success color for confirmation notices.
pub const OK: Color = Color::Rgb(130, 200, 120);

/// Border style based on focus state.
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUS)
    } else {
        Style::default().fg(BORDER)
    }
}

/// Style for section titles and headers.
pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Style for normal text content.
pub fn text_style() -> Style {
    Style::default().fg(FG)
}

/// Style for secondary text.
pub fn text_muted() -> Style {
    Style::default().fg(FG_MUTED)
}

/// Style for the gold kicker/highlight lines.
pub fn highlight_style() -> Style {
    Style::default().fg(GOLD)
}
