use std::fmt;

use ratatui::style::Color;

/// A color usable both as a ratatui style and as a raw ANSI escape, so the
/// full-screen UI and plain stdout summaries stay in step.
#[derive(Clone, Copy, Debug)]
pub struct PaletteColor {
    tui: Color,
    ansi: &'static str,
}

impl PaletteColor {
    pub const fn tui(self) -> Color {
        self.tui
    }

    /// Wrap `value` in this color's ANSI escape.
    pub fn paint(self, value: impl fmt::Display) -> String {
        format!("{}{}{}", self.ansi, value, Palette::RESET)
    }
}

pub struct Palette;

impl Palette {
    pub const RESET: &'static str = "\x1b[0m";
    const DIM_CODE: &'static str = "\x1b[2m";

    pub const ACCENT: PaletteColor = PaletteColor {
        tui: Color::Blue,
        ansi: "\x1b[34m",
    };
    pub const INFO: PaletteColor = PaletteColor {
        tui: Color::Cyan,
        ansi: "\x1b[36m",
    };
    pub const SUCCESS: PaletteColor = PaletteColor {
        tui: Color::Green,
        ansi: "\x1b[32m",
    };
    pub const WARNING: PaletteColor = PaletteColor {
        tui: Color::Yellow,
        ansi: "\x1b[33m",
    };
    pub const BORDER: PaletteColor = PaletteColor {
        tui: Color::Gray,
        ansi: "\x1b[90m",
    };

    pub fn dim(value: impl fmt::Display) -> String {
        format!("{}{}{}", Self::DIM_CODE, value, Self::RESET)
    }
}
