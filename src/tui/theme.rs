use crate::palette::Palette;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

/// Centralized styles for a consistent look across the study screen.
pub struct Theme;

impl Theme {
    pub const KEY_FG: Color = Color::Rgb(255, 255, 255);

    pub fn counter() -> Style {
        Style::default()
            .fg(Palette::ACCENT.tui())
            .add_modifier(Modifier::BOLD)
    }

    pub fn prompt() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn answer_shown() -> Style {
        Style::default().fg(Palette::SUCCESS.tui())
    }

    /// Stand-in for the answer while it is hidden.
    pub fn answer_hidden() -> Style {
        Style::default()
            .fg(Palette::BORDER.tui())
            .add_modifier(Modifier::DIM)
    }

    pub fn selector_on() -> Style {
        Style::default()
            .fg(Palette::WARNING.tui())
            .add_modifier(Modifier::BOLD)
    }

    pub fn selector_off() -> Style {
        Style::default().fg(Palette::BORDER.tui())
    }

    pub fn backdrop<'a>() -> Block<'a> {
        Block::default()
    }

    pub fn panel_with_line<'a>(title: Line<'a>) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Palette::BORDER.tui()))
            .title(title)
            .title_alignment(Alignment::Left)
    }

    pub fn counter_span(text: impl Into<String>) -> Span<'static> {
        Span::styled(text.into(), Self::counter())
    }

    pub fn span(text: impl Into<String>) -> Span<'static> {
        Span::raw(text.into())
    }

    pub fn key_chip(text: impl Into<String>) -> Span<'static> {
        Span::styled(
            format!(" {} ", text.into()),
            Style::default()
                .fg(Self::KEY_FG)
                .bg(Palette::ACCENT.tui())
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn bullet() -> Span<'static> {
        Self::span(" • ")
    }

    pub fn section_header(text: impl Into<String>) -> Line<'static> {
        Line::from(vec![Span::styled(
            text.into(),
            Style::default().add_modifier(Modifier::BOLD),
        )])
    }
}
