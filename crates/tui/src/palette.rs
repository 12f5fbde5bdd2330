//! Colour palettes for the light and dark themes.

use df_protocol::{RunStatus, Theme};
use ratatui::style::{Color, Modifier, Style};

/// Colours used by every widget. One palette per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub header: Color,
    pub positive: Color,
    pub negative: Color,
    pub running: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Black,
        text: Color::Gray,
        muted: Color::DarkGray,
        border: Color::DarkGray,
        accent: Color::LightBlue,
        header: Color::Cyan,
        positive: Color::LightGreen,
        negative: Color::LightRed,
        running: Color::LightBlue,
    };

    pub const LIGHT: Palette = Palette {
        background: Color::White,
        text: Color::Black,
        muted: Color::Gray,
        border: Color::Gray,
        accent: Color::Blue,
        header: Color::DarkGray,
        positive: Color::Green,
        negative: Color::Red,
        running: Color::Blue,
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    /// Base style for a whole pane.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn status_style(&self, status: RunStatus) -> Style {
        match status {
            RunStatus::Running => Style::default().fg(self.running),
            RunStatus::Succeeded => Style::default().fg(self.positive),
            RunStatus::Failed => Style::default().fg(self.negative),
        }
    }

    /// Green for an increase, red for anything else.
    pub fn change_style(&self, increase: bool) -> Style {
        let color = if increase { self.positive } else { self.negative };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
