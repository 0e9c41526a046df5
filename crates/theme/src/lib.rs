pub mod colors;

pub use colors::Color;

use histview_config::{ChartConfig, ThemeConfig};

/// Compiled colours and sizes derived from [`ThemeConfig`] and [`ChartConfig`].
///
/// Calling [`Palette::from_config`] is infallible — invalid colour strings fall
/// back to the built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub bar:        Color,
    pub bar_edge:   Color,
    pub highlight:  Color,
    pub grid:       Color,
    pub font_size:  f32,
    /// Bar outline width; `0.0` = no outline.
    pub edge_width: f32,
    /// Draw horizontal grid lines.
    pub show_grid:  bool,
}

impl Palette {
    pub fn from_config(theme: &ThemeConfig, chart: &ChartConfig) -> Self {
        Self {
            background: Color::from_hex(&theme.background).unwrap_or(Color::BASE),
            foreground: Color::from_hex(&theme.foreground).unwrap_or(Color::TEXT),
            bar:        Color::from_hex(&theme.bar).unwrap_or(Color::BLUE),
            bar_edge:   Color::from_hex(&theme.bar_edge).unwrap_or(Color::BASE),
            highlight:  Color::from_hex(&theme.highlight).unwrap_or(Color::MAUVE),
            grid:       Color::from_hex(&theme.grid).unwrap_or(Color::SURFACE1),
            font_size:  if theme.font_size > 0.0 { theme.font_size } else { 13.0 },
            edge_width: chart.edge_width.max(0.0),
            show_grid:  chart.grid,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default(), &ChartConfig::default())
    }
}
