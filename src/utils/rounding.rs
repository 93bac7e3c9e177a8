//! Fixed-decimal rounding for report columns

/// Round to 1 decimal place (total scores)
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places (GC percent, mean lengths)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
