/// Evenly spaced "nice" tick values (steps of 1, 2 or 5 × 10ⁿ) inside
/// `[low, high]`, aiming for roughly `target` intervals.
///
/// A degenerate or non-finite span yields the single value `low`.
pub fn nice_ticks(low: f64, high: f64, target: usize) -> Vec<f64> {
    let span = high - low;
    if !(span.is_finite() && span > 0.0) {
        return vec![low];
    }

    let step = nice_step(span / target.max(1) as f64);
    let first = (low / step).ceil();
    let slack = step * 1e-9;

    (0..)
        .map(|i| (first + i as f64) * step)
        .take_while(|v| *v <= high + slack)
        .map(|v| if v.abs() < slack { 0.0 } else { v })
        .collect()
}

/// Round `raw` up to the nearest 1, 2 or 5 × 10ⁿ.
pub(crate) fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    // absorb rounding from log10/powf so exact 2.0 or 5.0 is not bumped up
    let fraction = raw / magnitude - 1e-9;

    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Format a tick value with just enough decimals for the tick `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{value:.decimals$}")
}
