/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const DEEP_TEAL: Self = Self { r: 0.059, g: 0.173, b: 0.173, a: 1.0 }; // #0f2c2c
    pub const ABYSS:     Self = Self { r: 0.0,   g: 0.122, b: 0.122, a: 1.0 }; // #001f1f
    pub const AQUA:      Self = Self { r: 0.0,   g: 1.0,   b: 0.906, a: 1.0 }; // #00ffe7
    pub const MINT:      Self = Self { r: 0.0,   g: 1.0,   b: 0.635, a: 1.0 }; // #00ffa2
    pub const WHITE:     Self = Self { r: 1.0,   g: 1.0,   b: 1.0,   a: 1.0 };

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let channel = |i: usize| -> Option<f32> {
            u8::from_str_radix(hex.get(i..i + 2)?, 16).ok().map(|b| b as f32 / 255.0)
        };

        match hex.len() {
            6 => Some(Self { r: channel(0)?, g: channel(2)?, b: channel(4)?, a: 1.0 }),
            8 => Some(Self { r: channel(0)?, g: channel(2)?, b: channel(4)?, a: channel(6)? }),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(Color::from_hex("#ffffff"), Some(Color::WHITE));
        let c = Color::from_hex("00ffe780").unwrap();
        assert_eq!(c.g, 1.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::AQUA.with_alpha(3.0).a, 1.0);
        assert_eq!(Color::AQUA.with_alpha(-1.0).a, 0.0);
    }
}
