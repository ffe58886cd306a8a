//! Rating aggregation for the star widget.
//!
//! The backend stores per-review ratings on a 0-5 scale; the page shows a
//! single aggregate rounded to the nearest half star.

/// Average of `ratings` rounded to the nearest 0.5.
///
/// Empty input yields 0.0 rather than dividing by zero. Ties on the doubled
/// value round half-up (`f64::round` is away-from-zero, and ratings are
/// non-negative).
pub fn half_star_average(ratings: &[f64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    (mean * 2.0).round() / 2.0
}

/// Formats an aggregate rating with one decimal digit, e.g. `"4.5"`.
pub fn format_stars(value: f64) -> String {
    format!("{:.1}", value)
}
