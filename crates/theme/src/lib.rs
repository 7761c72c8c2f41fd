pub mod colors;

pub use colors::Color;

use aqua_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to the built-in aqua palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:   Color,
    pub panel:        Color,
    pub foreground:   Color,
    pub accent:       Color,
    pub secondary:    Color,
    pub border:       Color,
    /// Dashed chart grid lines.
    pub grid:         Color,
    pub font_size:    f32,
    pub border_width: f32,
    pub padding:      u16,
    pub gap:          u16,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let foreground = Color::from_hex(&cfg.foreground).unwrap_or(Color::WHITE);
        Self {
            background:   Color::from_hex(&cfg.background).unwrap_or(Color::DEEP_TEAL),
            panel:        Color::from_hex(&cfg.panel).unwrap_or(Color::ABYSS),
            foreground,
            accent:       Color::from_hex(&cfg.accent).unwrap_or(Color::AQUA),
            secondary:    Color::from_hex(&cfg.secondary).unwrap_or(Color::MINT),
            border:       Color::from_hex(&cfg.border).unwrap_or(Color::WHITE),
            grid:         foreground.with_alpha(0.3),
            font_size:    cfg.font_size,
            border_width: cfg.border_width.max(0.0),
            padding:      cfg.padding,
            gap:          cfg.gap,
        }
    }

    /// Heading size for panel titles.
    pub fn title_size(&self) -> f32 {
        self.font_size + 8.0
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_colors_fall_back_to_palette() {
        let cfg = ThemeConfig {
            accent: "not-a-color".into(),
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&cfg).accent, Color::AQUA);
    }

    #[test]
    fn default_theme_matches_palette() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::from_hex("#0f2c2c").unwrap());
        assert_eq!(theme.secondary, Color::from_hex("#00ffa2").unwrap());
        assert!((theme.grid.a - 0.3).abs() < 1e-6);
    }
}
