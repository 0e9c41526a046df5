use crate::layout::PlotArea;
use crate::ticks::{format_tick, nice_ticks};
use histview_core::Histogram;
use histview_theme::Palette;
use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Size, Theme};

/// Pixels per axis interval when choosing how many ticks to draw.
const TICK_SPACING: f32 = 80.0;
const TICK_LENGTH:  f32 = 4.0;

/// Canvas program drawing a histogram as adjacent bars with axes, ticks and a
/// readout of the bin under the cursor.
pub struct BarChart {
    histogram: Histogram,
    palette:   Palette,
    /// Bars, grid and axes; only the hover overlay is redrawn on mouse moves.
    cache:     Cache,
}

impl BarChart {
    pub fn new(histogram: Histogram, palette: Palette) -> Self {
        Self {
            histogram,
            palette,
            cache: Cache::new(),
        }
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Text shown for bin `index` while hovering it.
    pub fn readout(&self, index: usize) -> Option<String> {
        let bin = self.histogram.bin(index)?;
        let close = if index + 1 == self.histogram.bins() { ']' } else { ')' };
        Some(format!("[{}, {}{close}  count {}", bin.low, bin.high, bin.count))
    }

    fn draw_chart(&self, frame: &mut Frame, area: &PlotArea) {
        let palette = &self.palette;
        let fg = palette.foreground.to_iced();
        let font = palette.font_size;

        // ── Grid + y axis ticks ───────────────────────────────────────────────
        let y_ticks = count_ticks(area);
        for &count in &y_ticks {
            let y = area.y_to_px(count);
            if palette.show_grid && count > 0.0 {
                frame.stroke(
                    &Path::line(Point::new(area.rect.x, y), Point::new(area.right(), y)),
                    Stroke::default().with_color(palette.grid.to_iced()).with_width(1.0),
                );
            }
            frame.stroke(
                &Path::line(Point::new(area.rect.x - TICK_LENGTH, y), Point::new(area.rect.x, y)),
                Stroke::default().with_color(fg).with_width(1.0),
            );

            let label = format_tick(count, 1.0);
            frame.fill_text(Text {
                content: label.clone(),
                position: Point::new(
                    area.rect.x - TICK_LENGTH - 4.0 - text_width(&label, font),
                    y - font / 2.0,
                ),
                color: fg,
                size: font.into(),
                ..Text::default()
            });
        }

        // ── Bars ──────────────────────────────────────────────────────────────
        for index in 0..self.histogram.bins() {
            if let Some(bar) = area.bar(&self.histogram, index) {
                self.draw_bar(frame, bar, palette.bar);
            }
        }

        // ── Axes ──────────────────────────────────────────────────────────────
        let axis = Stroke::default().with_color(fg).with_width(1.0);
        frame.stroke(
            &Path::line(
                Point::new(area.rect.x, area.bottom()),
                Point::new(area.right(), area.bottom()),
            ),
            axis.clone(),
        );
        frame.stroke(
            &Path::line(Point::new(area.rect.x, area.rect.y), Point::new(area.rect.x, area.bottom())),
            axis,
        );

        // ── x axis ticks ──────────────────────────────────────────────────────
        let target = (area.rect.width / TICK_SPACING).max(1.0) as usize;
        let x_ticks = nice_ticks(area.x_min, area.x_max, target);
        let step = tick_step(&x_ticks);
        for &value in &x_ticks {
            let x = area.x_to_px(value);
            frame.stroke(
                &Path::line(
                    Point::new(x, area.bottom()),
                    Point::new(x, area.bottom() + TICK_LENGTH),
                ),
                Stroke::default().with_color(fg).with_width(1.0),
            );

            let label = format_tick(value, step);
            frame.fill_text(Text {
                content: label.clone(),
                position: Point::new(
                    x - text_width(&label, font) / 2.0,
                    area.bottom() + TICK_LENGTH + 2.0,
                ),
                color: fg,
                size: font.into(),
                ..Text::default()
            });
        }
    }

    fn draw_bar(&self, frame: &mut Frame, bar: Rectangle, fill: histview_theme::Color) {
        let top_left = Point::new(bar.x, bar.y);
        let size = Size::new(bar.width, bar.height);

        frame.fill_rectangle(top_left, size, fill.to_iced());
        if self.palette.edge_width > 0.0 && bar.height > 0.0 {
            frame.stroke(
                &Path::rectangle(top_left, size),
                Stroke::default()
                    .with_color(self.palette.bar_edge.to_iced())
                    .with_width(self.palette.edge_width),
            );
        }
    }

    fn draw_hover(&self, frame: &mut Frame, area: &PlotArea, index: usize) {
        if let Some(bar) = area.bar(&self.histogram, index) {
            self.draw_bar(frame, bar, self.palette.highlight);
        }

        if let Some(readout) = self.readout(index) {
            frame.fill_text(Text {
                content: readout,
                position: Point::new(area.rect.x + 8.0, area.rect.y + 4.0),
                color: self.palette.highlight.to_iced(),
                size: self.palette.font_size.into(),
                ..Text::default()
            });
        }
    }
}

impl<Message> canvas::Program<Message> for BarChart {
    /// Bin currently under the cursor.
    type State = Option<usize>;

    fn update(
        &self,
        hovered: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if !matches!(event, canvas::Event::Mouse(_)) {
            return None;
        }

        let area = PlotArea::new(bounds.size(), &self.histogram);
        let now = cursor
            .position_in(bounds)
            .and_then(|point| area.bin_at(&self.histogram, point));

        if now == *hovered {
            return None;
        }

        tracing::trace!(bin = ?now, "hover changed");
        *hovered = now;
        Some(canvas::Action::request_redraw())
    }

    fn draw(
        &self,
        hovered: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let area = PlotArea::new(bounds.size(), &self.histogram);
        let chart = self
            .cache
            .draw(renderer, bounds.size(), |frame| self.draw_chart(frame, &area));

        let mut overlay = Frame::new(renderer, bounds.size());
        if let Some(index) = *hovered {
            self.draw_hover(&mut overlay, &area, index);
        }

        vec![chart, overlay.into_geometry()]
    }
}

/// Count ticks for the y axis: whole numbers only.
fn count_ticks(area: &PlotArea) -> Vec<f64> {
    let target = (area.rect.height / TICK_SPACING).max(1.0) as usize;
    let ticks = nice_ticks(0.0, area.y_max, target);
    if tick_step(&ticks) < 1.0 {
        (0..=area.y_max.floor() as u64).map(|c| c as f64).collect()
    } else {
        ticks
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

/// Rough rendered width of `label`, enough to centre or right-align it.
fn text_width(label: &str, size: f32) -> f32 {
    label.chars().count() as f32 * size * 0.6
}
