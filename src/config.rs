//! Benchmark configuration.
//!
//! Every parameter is a compile-time constant: buffer sizes, repetition
//! counts, flash geometry, and the flash window reserved for the
//! destructive phases. There is no runtime configuration surface.

/// Total capacity of the Pico's W25Q16JV QSPI flash.
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Byte offset of the first flash region the benchmark may erase or
/// program. Everything below this margin is left untouched so the test
/// writes cannot reach the running firmware's own code and data.
pub const FLASH_TARGET_OFFSET: u32 = 1024 * 1024;

/// Smallest erasable flash region (one sector).
pub const SECTOR_SIZE: usize = 4096;

/// Smallest programmable flash region (one page).
pub const PAGE_SIZE: usize = 256;

/// Repetitions allocated per measurement phase.
pub const NUM_RUNS: usize = 5;

/// RAM write test buffer size.
pub const RAM_BUF_SIZE: usize = 10 * 1024;

/// Block program test buffer size.
pub const BLOCK_BUF_SIZE: usize = 32 * 1024;

/// Delay before the first output line, giving an attached serial
/// terminal time to connect.
pub const STARTUP_DELAY_MS: u64 = 4000;

// Repetitions that make it into the printed report. Three of the five
// allocated runs for most phases; the page program phase reports all
// five. The extra runs still execute.

/// Reported repetitions for the RAM write phase.
pub const RAM_REPORTED_RUNS: usize = 3;

/// Reported repetitions for the sector erase phase.
pub const ERASE_REPORTED_RUNS: usize = 3;

/// Reported repetitions for the page program phase.
pub const PAGE_REPORTED_RUNS: usize = 5;

/// Reported repetitions for the block program phase.
pub const BLOCK_REPORTED_RUNS: usize = 3;

// =============================================================================
// Unit Tests (run on host with: cargo test --lib --target <host-triple>)
// =============================================================================
