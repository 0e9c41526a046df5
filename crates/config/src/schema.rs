use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `histview.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Initial window geometry.
    pub window: WindowConfig,
    /// Colours and font size.
    pub theme: ThemeConfig,
    /// Chart drawing options.
    pub chart: ChartConfig,
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial width in logical pixels.
    pub width: f32,
    /// Initial height in logical pixels.
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width:  900.0,
            height: 600.0,
        }
    }
}

/// Theme / styling configuration. Colours are hex strings (`#RRGGBB` or
/// `#RRGGBBAA`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background.
    pub background: String,
    /// Text, axes and tick labels.
    pub foreground: String,
    /// Bar fill.
    pub bar: String,
    /// Bar outline.
    pub bar_edge: String,
    /// Fill of the bar under the cursor.
    pub highlight: String,
    /// Horizontal grid lines.
    pub grid: String,
    /// Font size in points.
    pub font_size: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#1e1e2e".to_string(), // Catppuccin Mocha — base
            foreground: "#cdd6f4".to_string(), // Catppuccin Mocha — text
            bar:        "#89b4fa".to_string(), // Catppuccin Mocha — blue
            bar_edge:   "#1e1e2e".to_string(),
            highlight:  "#cba6f7".to_string(), // Catppuccin Mocha — mauve
            grid:       "#45475a".to_string(), // Catppuccin Mocha — surface1
            font_size:  13.0,
        }
    }
}

/// Chart drawing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Draw horizontal grid lines at the count ticks.
    pub grid: bool,
    /// Bar outline width in logical pixels; `0` disables outlines.
    pub edge_width: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            grid:       true,
            edge_width: 1.0,
        }
    }
}
