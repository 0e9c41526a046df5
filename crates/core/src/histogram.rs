use crate::{HistError, Result};
use std::num::NonZeroUsize;

/// Bin count used when none is given on the command line.
pub const DEFAULT_BINS: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(n) => n,
    None => unreachable!(),
};

/// Largest bin count a histogram accepts.
pub const MAX_BINS: usize = 1 << 20;

/// One equal-width interval of a [`Histogram`] and the number of samples in it.
///
/// Every bin covers `[low, high)` except the last one, which also includes
/// `high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub low:   f64,
    pub high:  f64,
    pub count: u64,
}

impl Bin {
    /// Width of the interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Frequency counts of a sample set over `bins` equal-width intervals spanning
/// the observed `[min, max]` range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges:  Box<[f64]>,
    counts: Box<[u64]>,
}

impl Histogram {
    /// Count `samples` into `bins` equal-width bins.
    ///
    /// An empty sample set spans `[0, 1]`; a set of identical values `v`
    /// spans `[v - 0.5, v + 0.5]`. Samples containing NaN or infinities are
    /// rejected because their range cannot be divided, and so are more than
    /// [`MAX_BINS`] bins.
    pub fn new(samples: &[f64], bins: NonZeroUsize) -> Result<Self> {
        let n = bins.get();
        if n > MAX_BINS {
            return Err(HistError::Argument(format!(
                "{n} bins requested, at most {MAX_BINS} are supported"
            )));
        }

        let (first, last) = sample_range(samples)?;

        // Edges are computed on halved values: `last - first` of two finite
        // samples may exceed f64::MAX, half of it never does.
        let step = half_span(first, last) / n as f64;
        let mut edges: Vec<f64> = (0..=n)
            .map(|i| (first / 2.0 + i as f64 * step) * 2.0)
            .collect();
        edges[0] = first;
        edges[n] = last;

        let mut histogram = Self {
            edges:  edges.into(),
            counts: vec![0; n].into(),
        };

        for &value in samples {
            // every sample lies inside the range it helped define
            if let Some(index) = histogram.bin_index(value) {
                histogram.counts[index] += 1;
            }
        }

        Ok(histogram)
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// The `bins() + 1` bin edges in ascending order.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Sample count per bin.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of counted samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest single-bin count, `0` for an empty histogram.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// The `(low, high)` span covered by all bins.
    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// The bin at `index`, if it exists.
    pub fn bin(&self, index: usize) -> Option<Bin> {
        let count = *self.counts.get(index)?;
        Some(Bin {
            low: self.edges[index],
            high: self.edges[index + 1],
            count,
        })
    }

    /// Index of the bin `value` falls into, or `None` outside the range.
    ///
    /// The scaled index is checked against the stored edges so that rounding
    /// in the scale factor never moves a value across an edge.
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        let (first, last) = self.range();
        if !(first..=last).contains(&value) {
            return None;
        }

        let n = self.bins();
        let norm = n as f64 / half_span(first, last);
        let mut index = (((value / 2.0 - first / 2.0) * norm) as usize).min(n - 1);

        if value < self.edges[index] {
            index = index.saturating_sub(1);
        } else if index != n - 1 && value >= self.edges[index + 1] {
            index += 1;
        }

        Some(index)
    }

    /// Iterate over all bins from lowest to highest.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            index:     0,
            histogram: self,
        }
    }
}

impl<'a> IntoIterator for &'a Histogram {
    type Item = Bin;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator across the histogram bins.
pub struct Iter<'a> {
    index:     usize,
    histogram: &'a Histogram,
}

impl Iterator for Iter<'_> {
    type Item = Bin;

    fn next(&mut self) -> Option<Bin> {
        let bin = self.histogram.bin(self.index)?;
        self.index += 1;
        Some(bin)
    }
}

/// Half of `high - low`, finite for any two finite operands.
fn half_span(low: f64, high: f64) -> f64 {
    high / 2.0 - low / 2.0
}

fn sample_range(samples: &[f64]) -> Result<(f64, f64)> {
    if samples.is_empty() {
        tracing::warn!("no samples to count; using the range [0, 1]");
        return Ok((0.0, 1.0));
    }

    if let Some(bad) = samples.iter().find(|v| !v.is_finite()) {
        return Err(HistError::Range(format!(
            "autodetected range is not finite (sample {bad})"
        )));
    }

    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if min == max {
        Ok((min - 0.5, max + 0.5))
    } else {
        Ok((min, max))
    }
}
