//! Timing sample reduction.
//!
//! Samples are signed microsecond durations, the difference of two
//! monotonic timestamps. The report works in milliseconds; the mean is
//! taken over the reported subset of a phase's samples, not the full
//! allocated array.

/// Convert a microsecond sample to milliseconds.
pub fn to_ms(us: i64) -> f64 {
    us as f64 / 1000.0
}

/// Arithmetic mean of `samples_us` in milliseconds.
///
/// Returns 0.0 for an empty slice.
pub fn mean_ms(samples_us: &[i64]) -> f64 {
    if samples_us.is_empty() {
        return 0.0;
    }
    let sum_ms: f64 = samples_us.iter().map(|&us| to_ms(us)).sum();
    sum_ms / samples_us.len() as f64
}

// =============================================================================
// Unit Tests (run on host with: cargo test --lib --target <host-triple>)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ms_is_division_by_1000() {
        assert_eq!(to_ms(512), 0.512);
        assert_eq!(to_ms(1000), 1.0);
        assert_eq!(to_ms(0), 0.0);
        assert_eq!(to_ms(45_250), 45.25);
    }

    #[test]
    fn test_mean_over_subset_only() {
        // Mean of the first 3 samples must ignore the trailing 2.
        let samples = [512i64, 498, 501, 900_000, 900_000];
        let mean = mean_ms(&samples[..3]);
        assert!((mean - 1.511 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_of_full_array() {
        let samples = [1000i64, 2000, 3000, 4000, 5000];
        assert_eq!(mean_ms(&samples), 3.0);
    }

    #[test]
    fn test_mean_of_single_sample() {
        assert_eq!(mean_ms(&[42_000]), 42.0);
    }

    #[test]
    fn test_mean_of_empty_slice() {
        assert_eq!(mean_ms(&[]), 0.0);
    }
}
