/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BASE:     Self = Self { r: 0.118, g: 0.118, b: 0.180, a: 1.0 }; // #1e1e2e
    pub const TEXT:     Self = Self { r: 0.804, g: 0.839, b: 0.957, a: 1.0 }; // #cdd6f4
    pub const BLUE:     Self = Self { r: 0.537, g: 0.706, b: 0.980, a: 1.0 }; // #89b4fa
    pub const MAUVE:    Self = Self { r: 0.796, g: 0.651, b: 0.969, a: 1.0 }; // #cba6f7
    pub const SURFACE1: Self = Self { r: 0.271, g: 0.278, b: 0.353, a: 1.0 }; // #45475a

    /// Parse a CSS-style hex colour string (`#RRGGBB` or `#RRGGBBAA`, the `#`
    /// is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return None;
        }

        let channel = |i: usize| -> Option<f32> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };

        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if hex.len() == 8 { channel(6)? } else { 1.0 },
        })
    }

    /// Convert to an [`iced::Color`].
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}
