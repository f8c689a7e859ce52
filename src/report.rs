//! Report line rendering.
//!
//! One line per phase:
//!
//! ```text
//! RAM write (10 KB): Tempos (ms): [0.512, 0.498, 0.501], Média: 0.504 ms
//! ```
//!
//! Values are milliseconds with exactly 3 decimal places, followed by the
//! arithmetic mean of the listed values. Lines are rendered into a
//! fixed-capacity string so the console transport can emit them whole.

use core::fmt::Write;

use heapless::String;

use crate::timing;

/// Maximum characters per report line.
pub const LINE_LEN: usize = 128;

/// Render the report line for one phase.
///
/// `times_us` is the reported subset of the phase's samples; the mean
/// covers exactly these values.
pub fn phase_line(
    label: &str,
    times_us: &[i64],
) -> String<LINE_LEN> {
    let mut line: String<LINE_LEN> = String::new();
    write!(line, "{label} Tempos (ms): [").ok();
    for (i, &us) in times_us.iter().enumerate() {
        if i > 0 {
            write!(line, ", ").ok();
        }
        write!(line, "{:.3}", timing::to_ms(us)).ok();
    }
    write!(line, "], Média: {:.3} ms", timing::mean_ms(times_us)).ok();
    line
}

// =============================================================================
// Unit Tests (run on host with: cargo test --lib --target <host-triple>)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_shape_three_values() {
        let line = phase_line("RAM write (10 KB):", &[512, 498, 501]);
        assert_eq!(
            line.as_str(),
            "RAM write (10 KB): Tempos (ms): [0.512, 0.498, 0.501], Média: 0.504 ms"
        );
    }

    #[test]
    fn test_line_shape_five_values() {
        let line = phase_line("Flash PROGRAM (256 B):", &[950, 951, 949, 950, 950]);
        assert_eq!(
            line.as_str(),
            "Flash PROGRAM (256 B): Tempos (ms): [0.950, 0.951, 0.949, 0.950, 0.950], Média: 0.950 ms"
        );
    }

    #[test]
    fn test_value_count_matches_input() {
        let line = phase_line("Flash ERASE (4 KB):", &[45_120, 44_980, 45_300]);
        let commas_inside = line.as_str().split('[').nth(1).unwrap().split(']').next().unwrap();
        assert_eq!(commas_inside.split(", ").count(), 3);
    }

    #[test]
    fn test_three_decimal_places_always() {
        // Whole milliseconds still render with trailing zeros.
        let line = phase_line("Flash ERASE (4 KB):", &[45_000, 46_000, 47_000]);
        assert_eq!(
            line.as_str(),
            "Flash ERASE (4 KB): Tempos (ms): [45.000, 46.000, 47.000], Média: 46.000 ms"
        );
    }

    #[test]
    fn test_mean_covers_printed_subset_only() {
        // The slice handed in is already the reported subset; a trailing
        // outlier that was allocated but not reported must not leak in.
        let all_runs = [1000i64, 2000, 3000, 1_000_000, 1_000_000];
        let line = phase_line("Flash PROGRAM (32 KB):", &all_runs[..3]);
        assert!(line.as_str().ends_with("Média: 2.000 ms"));
    }

    #[test]
    fn test_longest_line_fits_capacity() {
        // Five large values under the longest label must not truncate.
        let line = phase_line("Flash PROGRAM (256 B):", &[999_999_999; 5]);
        assert!(line.as_str().ends_with(" ms"));
        assert!(line.len() <= LINE_LEN);
    }
}
