//! # Theme Palettes
//!
//! Two fixed palettes selected by the core `dark_mode` flag. Every
//! component takes a `&Theme` prop instead of hardcoding colors, so the
//! Ctrl+T toggle restyles the whole tree on the next frame.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Default text color.
    pub fg: Color,
    /// Secondary text: previews, time labels, hints.
    pub muted: Color,
    /// Brand color: record control, badges, selected tab.
    pub accent: Color,
    /// Text rendered on top of `accent`.
    pub on_accent: Color,
    /// Block borders.
    pub border: Color,
    /// Background for the selected / hovered chat row.
    pub highlight_bg: Color,
    /// Outgoing voice bubble.
    pub bubble_out: Color,
    /// Incoming voice bubble.
    pub bubble_in: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            muted: Color::DarkGray,
            accent: Color::Magenta,
            on_accent: Color::White,
            border: Color::Gray,
            highlight_bg: Color::Rgb(225, 225, 235),
            bubble_out: Color::Magenta,
            bubble_in: Color::DarkGray,
        }
    }

    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            muted: Color::Gray,
            accent: Color::LightMagenta,
            on_accent: Color::Black,
            border: Color::DarkGray,
            highlight_bg: Color::Rgb(45, 45, 60),
            bubble_out: Color::LightMagenta,
            bubble_in: Color::Gray,
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }
}
