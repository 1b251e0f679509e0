//! Dynamic confirmation threshold.

/// `clamp(candidate_count / divisor, min, max)`.
///
/// The "should we insert a confirmation question" decision scales with
/// catalog size: a 50-item catalog confirms much earlier than a 5000-item
/// one under the same config.
pub fn effective_confirm_threshold(candidate_count: usize, min: f64, max: f64, divisor: f64) -> f64 {
    (candidate_count as f64 / divisor).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_with_catalog_size_and_clamps() {
        assert_eq!(effective_confirm_threshold(100, 3.0, 12.0, 25.0), 4.0);
        assert_eq!(effective_confirm_threshold(10, 3.0, 12.0, 25.0), 3.0);
        assert_eq!(effective_confirm_threshold(10_000, 3.0, 12.0, 25.0), 12.0);
    }
}
