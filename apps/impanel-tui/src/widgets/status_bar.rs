//! Status bar with mode indicator

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::mode::Mode;

/// Top status bar: mode indicator, app name, and the help hint.
///
/// Mode color coding:
/// - Normal: Blue
/// - Insert: Green
/// - Select: Yellow
/// - Command: Magenta
pub struct StatusBar {
    mode: Mode,
}

impl StatusBar {
    /// Create a status bar for the given mode.
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Get the display color for a mode.
    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Normal => Color::Blue,
            Mode::Insert => Color::Green,
            Mode::Select => Color::Yellow,
            Mode::Command => Color::Magenta,
        }
    }

    /// The mode indicator as a styled span.
    pub fn mode_span(&self) -> Span<'static> {
        Span::styled(
            format!("[{}]", self.mode.short_code()),
            Style::default()
                .fg(Color::White)
                .bg(Self::mode_color(self.mode))
                .add_modifier(Modifier::BOLD),
        )
    }

    /// The full status line.
    pub fn as_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            self.mode_span(),
            Span::raw(" impanel | dataset search"),
            Span::styled(
                " | Press ? for help",
                Style::default().fg(Color::Gray),
            ),
        ])
    }
}
