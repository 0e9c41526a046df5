use histview_core::Histogram;
use iced::{Point, Rectangle, Size};

/// Space kept around the plot area for tick labels.
const MARGIN_LEFT:   f32 = 56.0;
const MARGIN_RIGHT:  f32 = 16.0;
const MARGIN_TOP:    f32 = 12.0;
const MARGIN_BOTTOM: f32 = 32.0;

/// Fraction of the bin range added on each side of the x axis.
const X_PADDING: f64 = 0.05;
/// Head room above the tallest bar.
const Y_PADDING: f64 = 1.05;

/// Mapping between histogram data coordinates and canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    /// Plot rectangle inside the canvas.
    pub rect:  Rectangle,
    /// Data value at the left and right edge of `rect`.
    pub x_min: f64,
    pub x_max: f64,
    /// Count at the top edge of `rect`; the bottom edge is zero.
    pub y_max: f64,
}

impl PlotArea {
    pub fn new(canvas: Size, histogram: &Histogram) -> Self {
        let rect = Rectangle {
            x:      MARGIN_LEFT,
            y:      MARGIN_TOP,
            width:  (canvas.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (canvas.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        };

        let (low, high) = histogram.range();
        let pad = high * X_PADDING - low * X_PADDING;

        Self {
            rect,
            x_min: low - pad,
            x_max: high + pad,
            y_max: (histogram.max_count() as f64 * Y_PADDING).max(1.0),
        }
    }

    /// Horizontal pixel position of data value `x`.
    pub fn x_to_px(&self, x: f64) -> f32 {
        // halved so that ranges wider than f64::MAX stay finite
        let t = (x / 2.0 - self.x_min / 2.0) / (self.x_max / 2.0 - self.x_min / 2.0);
        self.rect.x + (t as f32) * self.rect.width
    }

    /// Vertical pixel position of bar height `count`.
    pub fn y_to_px(&self, count: f64) -> f32 {
        let t = count / self.y_max;
        self.bottom() - (t as f32) * self.rect.height
    }

    /// Data value under horizontal pixel position `px`.
    pub fn px_to_x(&self, px: f32) -> f64 {
        let t = f64::from((px - self.rect.x) / self.rect.width);
        (self.x_min / 2.0 + t * (self.x_max / 2.0 - self.x_min / 2.0)) * 2.0
    }

    /// Pixel y of the x axis.
    pub fn bottom(&self) -> f32 {
        self.rect.y + self.rect.height
    }

    /// Pixel x of the right edge of the plot.
    pub fn right(&self) -> f32 {
        self.rect.x + self.rect.width
    }

    /// Rectangle of the bar for bin `index`, `None` if there is no such bin.
    pub fn bar(&self, histogram: &Histogram, index: usize) -> Option<Rectangle> {
        let bin = histogram.bin(index)?;
        let left = self.x_to_px(bin.low);
        let top = self.y_to_px(bin.count as f64);

        Some(Rectangle {
            x:      left,
            y:      top,
            width:  self.x_to_px(bin.high) - left,
            height: self.bottom() - top,
        })
    }

    /// Bin under canvas position `point`, if the point is inside the plot.
    pub fn bin_at(&self, histogram: &Histogram, point: Point) -> Option<usize> {
        if !self.rect.contains(point) {
            return None;
        }
        histogram.bin_index(self.px_to_x(point.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn histogram() -> Histogram {
        let samples = [0.0, 1.0, 1.5, 2.0, 3.0, 3.5, 4.0];
        Histogram::new(&samples, NonZeroUsize::new(4).unwrap()).unwrap()
    }

    #[test]
    fn plot_rect_leaves_margins() {
        let area = PlotArea::new(Size::new(800.0, 600.0), &histogram());

        assert_eq!(area.rect.x, MARGIN_LEFT);
        assert_eq!(area.right(), 800.0 - MARGIN_RIGHT);
        assert_eq!(area.bottom(), 600.0 - MARGIN_BOTTOM);
        assert!((area.y_max - 3.0 * Y_PADDING).abs() < 1e-12);
    }

    #[test]
    fn tiny_canvas_keeps_positive_rect() {
        let area = PlotArea::new(Size::new(10.0, 10.0), &histogram());
        assert!(area.rect.width >= 1.0);
        assert!(area.rect.height >= 1.0);
    }

    #[test]
    fn bars_fit_inside_plot() {
        let histogram = histogram();
        let area = PlotArea::new(Size::new(800.0, 600.0), &histogram);

        for index in 0..histogram.bins() {
            let bar = area.bar(&histogram, index).unwrap();
            assert!(bar.x >= area.rect.x);
            assert!(bar.x + bar.width <= area.right() + 1e-3);
            assert!(bar.y >= area.rect.y);
            assert!((bar.y + bar.height - area.bottom()).abs() < 1e-3);
        }
        assert_eq!(area.bar(&histogram, 4), None);
    }

    #[test]
    fn taller_bins_get_taller_bars() {
        let histogram = histogram();
        let area = PlotArea::new(Size::new(800.0, 600.0), &histogram);

        // counts are [1, 2, 1, 3]
        let heights: Vec<f32> = (0..4)
            .map(|i| area.bar(&histogram, i).unwrap().height)
            .collect();
        assert!(heights[3] > heights[1]);
        assert!(heights[1] > heights[0]);
        assert!((heights[0] - heights[2]).abs() < 1e-3);
    }

    #[test]
    fn hit_testing_maps_to_bins() {
        let histogram = histogram();
        let area = PlotArea::new(Size::new(800.0, 600.0), &histogram);
        let y = area.bottom() - 1.0;

        let centre = |i: usize| {
            let bar = area.bar(&histogram, i).unwrap();
            Point::new(bar.x + bar.width / 2.0, y)
        };

        assert_eq!(area.bin_at(&histogram, centre(0)), Some(0));
        assert_eq!(area.bin_at(&histogram, centre(3)), Some(3));
        // padding left of the first bar
        assert_eq!(area.bin_at(&histogram, Point::new(area.rect.x + 1.0, y)), None);
        // below the x axis
        assert_eq!(area.bin_at(&histogram, Point::new(centre(1).x, area.bottom() + 5.0)), None);
    }

    #[test]
    fn huge_range_maps_to_finite_pixels() {
        let histogram = Histogram::new(&[-1e308, 0.0, 1e308], NonZeroUsize::new(4).unwrap())
            .unwrap();
        let area = PlotArea::new(Size::new(800.0, 600.0), &histogram);

        assert!(area.x_min.is_finite() && area.x_max.is_finite());
        for index in 0..histogram.bins() {
            let bar = area.bar(&histogram, index).unwrap();
            assert!(bar.x.is_finite() && bar.width > 0.0);
            assert!(bar.x >= area.rect.x && bar.x + bar.width <= area.right() + 1e-3);
        }

        let middle = area.x_to_px(0.0);
        assert!((middle - (area.rect.x + area.rect.width / 2.0)).abs() < 1e-2);
        assert_eq!(area.bin_at(&histogram, Point::new(middle + 1.0, area.bottom() - 1.0)), Some(2));
    }

    #[test]
    fn pixel_mapping_round_trips() {
        let area = PlotArea::new(Size::new(640.0, 480.0), &histogram());
        let px = area.x_to_px(2.5);
        assert!((area.px_to_x(px) - 2.5).abs() < 1e-3);
    }
}
