//! Trait for providing theme configuration to the diff table.

use ratatui::style::Color;

/// Provides theme colors for the diff table.
///
/// Implement this trait to integrate the table with your application's
/// theme system. [`DefaultTheme`] (dark) and [`LightTheme`] cover the
/// `is_light_theme` flag.
pub trait ThemeProvider: Send + Sync {
    /// Background color for addition lines.
    fn addition_background(&self) -> Color;

    /// Background color for deletion lines.
    fn deletion_background(&self) -> Color;

    /// Background color for context lines.
    fn context_background(&self) -> Color {
        Color::Reset
    }

    /// Background color for hunk header lines.
    fn hunk_header_background(&self) -> Color {
        Color::Rgb(40, 40, 60)
    }

    /// Foreground color for hunk header text.
    fn hunk_header_foreground(&self) -> Color {
        Color::Cyan
    }

    /// Foreground color for line numbers.
    fn line_number_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for decoration text appended after a line.
    fn attachment_foreground(&self) -> Color {
        Color::Gray
    }

    /// Border color of the table.
    fn border(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color of the empty-state message.
    fn placeholder_foreground(&self) -> Color {
        Color::DarkGray
    }
}

/// Default theme with sensible dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl ThemeProvider for DefaultTheme {
    fn addition_background(&self) -> Color {
        Color::Rgb(30, 60, 30) // dark green
    }

    fn deletion_background(&self) -> Color {
        Color::Rgb(60, 30, 30) // dark red
    }
}

/// Light-mode colors.
#[derive(Debug, Clone, Default)]
pub struct LightTheme;

impl ThemeProvider for LightTheme {
    fn addition_background(&self) -> Color {
        Color::Rgb(220, 255, 220)
    }

    fn deletion_background(&self) -> Color {
        Color::Rgb(255, 225, 225)
    }

    fn hunk_header_background(&self) -> Color {
        Color::Rgb(225, 235, 250)
    }

    fn hunk_header_foreground(&self) -> Color {
        Color::Blue
    }

    fn line_number_foreground(&self) -> Color {
        Color::Gray
    }

    fn attachment_foreground(&self) -> Color {
        Color::DarkGray
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = DefaultTheme;
        assert_eq!(theme.addition_background(), Color::Rgb(30, 60, 30));
        assert_eq!(theme.deletion_background(), Color::Rgb(60, 30, 30));
        assert_eq!(theme.context_background(), Color::Reset);
    }

    #[test]
    fn test_light_theme_overrides_header() {
        let theme = LightTheme;
        assert_eq!(theme.hunk_header_foreground(), Color::Blue);
        assert_ne!(
            theme.addition_background(),
            DefaultTheme.addition_background()
        );
    }
}
