use crate::{Histogram, Result};
use std::num::NonZeroUsize;
use std::path::Path;

/// Everything the viewer window needs to draw one histogram.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Window and heading title, `"<path> histogram"`.
    pub title:     String,
    pub histogram: Histogram,
    /// Number of samples read from the input.
    pub samples:   usize,
}

impl Figure {
    /// Bin `samples` read from `source` into a titled figure.
    pub fn new(source: &Path, samples: &[f64], bins: NonZeroUsize) -> Result<Self> {
        let histogram = Histogram::new(samples, bins)?;
        Ok(Self {
            title: title_for(source),
            histogram,
            samples: samples.len(),
        })
    }

    /// One-line summary shown under the chart.
    pub fn summary(&self) -> String {
        let (low, high) = self.histogram.range();
        format!(
            "{} samples · {} bins · range [{}, {}]",
            self.samples,
            self.histogram.bins(),
            low,
            high,
        )
    }
}

/// The title for a histogram of the file at `source`.
pub fn title_for(source: &Path) -> String {
    format!("{} histogram", source.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_appends_suffix_to_path() {
        assert_eq!(title_for(Path::new("data/run-1.csv")), "data/run-1.csv histogram");
    }

    #[test]
    fn summary_lists_counts_and_range() {
        let bins = NonZeroUsize::new(4).unwrap();
        let figure = Figure::new(Path::new("x.csv"), &[0.0, 1.0, 2.0, 4.0], bins).unwrap();

        assert_eq!(figure.title, "x.csv histogram");
        assert_eq!(figure.samples, 4);
        assert_eq!(figure.summary(), "4 samples · 4 bins · range [0, 4]");
    }
}
