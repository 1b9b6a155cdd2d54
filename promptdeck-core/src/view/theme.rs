//! src/view/theme.rs
//! ============================================================================
//! # Colour palettes
//!
//! `Default` and `Dark` use Catppuccin Mocha, `Light` uses Catppuccin Latte.
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};
use tracing::{debug, instrument};

use crate::config::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub comment: Color,
    pub accent: Color,
    pub link: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

pub const MOCHA: Palette = Palette {
    background: Color::Rgb(30, 30, 46),  // Base
    surface: Color::Rgb(69, 71, 90),     // Surface1
    foreground: Color::Rgb(205, 214, 244), // Text
    comment: Color::Rgb(127, 132, 156),  // Overlay1
    accent: Color::Rgb(203, 166, 247),   // Mauve
    link: Color::Rgb(137, 220, 235),     // Sky
    success: Color::Rgb(166, 227, 161),  // Green
    warning: Color::Rgb(249, 226, 175),  // Yellow
    error: Color::Rgb(243, 139, 168),    // Red
};

pub const LATTE: Palette = Palette {
    background: Color::Rgb(239, 241, 245), // Base
    surface: Color::Rgb(188, 192, 204),    // Surface1
    foreground: Color::Rgb(76, 79, 105),   // Text
    comment: Color::Rgb(140, 143, 161),    // Overlay1
    accent: Color::Rgb(136, 57, 239),      // Mauve
    link: Color::Rgb(4, 165, 229),         // Sky
    success: Color::Rgb(64, 160, 43),      // Green
    warning: Color::Rgb(223, 142, 29),     // Yellow
    error: Color::Rgb(210, 15, 57),        // Red
};

impl Palette {
    #[instrument(level = "debug")]
    pub fn for_theme(theme: Theme) -> Self {
        let palette = match theme {
            Theme::Default | Theme::Dark => MOCHA,
            Theme::Light => LATTE,
        };
        debug!(background = ?palette.background, "Palette selected");
        palette
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.link).add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn link(&self) -> Style {
        Style::default().fg(self.link)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.comment)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.surface)
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    pub fn copy_control(&self, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(self.success).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(self.success).add_modifier(Modifier::BOLD)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        MOCHA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_per_theme() {
        assert_eq!(Palette::for_theme(Theme::Default), MOCHA);
        assert_eq!(Palette::for_theme(Theme::Dark), MOCHA);
        assert_eq!(Palette::for_theme(Theme::Light), LATTE);
    }
}
