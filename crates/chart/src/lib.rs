//! Bar-chart rendering of a [`histview_core::Histogram`] on an iced canvas.

pub mod bar_chart;
pub mod layout;
pub mod ticks;

pub use bar_chart::BarChart;
pub use layout::PlotArea;
pub use ticks::{format_tick, nice_ticks};
