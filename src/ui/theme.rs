//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::sort::Role;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Bars highlighted with [`Role::Primary`].
    pub primary: Color,
    /// Bars highlighted with [`Role::Secondary`].
    pub secondary: Color,
    /// Default bar colors, cycled by index so neighbours stay distinguishable.
    pub gradient: [Color; 3],
    /// Accent color for the status bar and help overlay.
    pub highlight: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for the algorithm/direction title.
    pub title: Style,
    /// Style for the key instructions under the title.
    pub instructions: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            primary: Color::Green,
            secondary: Color::Red,
            gradient: [
                Color::Rgb(128, 128, 128),
                Color::Rgb(160, 160, 160),
                Color::Rgb(192, 192, 192),
            ],
            highlight: Color::Cyan,
            border: Color::Gray,
            title: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            instructions: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            primary: Color::Green,
            secondary: Color::Red,
            gradient: [
                Color::Rgb(96, 96, 96),
                Color::Rgb(128, 128, 128),
                Color::Rgb(160, 160, 160),
            ],
            highlight: Color::Blue,
            border: Color::DarkGray,
            title: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            instructions: Style::default().fg(Color::Black),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Color of the bar at `index`, given its highlight role.
    pub fn bar_color(&self, index: usize, role: Option<Role>) -> Color {
        match role {
            Some(Role::Primary) => self.primary,
            Some(Role::Secondary) => self.secondary,
            None => self.gradient[index % self.gradient.len()],
        }
    }
}
