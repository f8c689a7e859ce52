//! Flash offset layout for the destructive phases.
//!
//! The erase and block program phases step to a fresh region on every
//! repetition so no erase unit is worn twice within one run. The page
//! program phase stays on one fixed page by stepping with `run = 0`.

/// Flash offset of repetition `run` when each repetition consumes
/// `unit` bytes starting at `base`.
pub const fn run_offset(
    base: u32,
    run: usize,
    unit: usize,
) -> u32 {
    base + (run * unit) as u32
}

// =============================================================================
// Unit Tests (run on host with: cargo test --lib --target <host-triple>)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        BLOCK_BUF_SIZE,
        FLASH_SIZE,
        FLASH_TARGET_OFFSET,
        NUM_RUNS,
        SECTOR_SIZE,
    };

    #[test]
    fn test_offsets_step_by_unit() {
        assert_eq!(run_offset(0x10_0000, 0, SECTOR_SIZE), 0x10_0000);
        assert_eq!(run_offset(0x10_0000, 1, SECTOR_SIZE), 0x10_1000);
        assert_eq!(run_offset(0x10_0000, 4, SECTOR_SIZE), 0x10_4000);
    }

    #[test]
    fn test_erase_regions_never_overlap() {
        for run in 1..NUM_RUNS {
            let prev = run_offset(FLASH_TARGET_OFFSET, run - 1, SECTOR_SIZE);
            let cur = run_offset(FLASH_TARGET_OFFSET, run, SECTOR_SIZE);
            assert!(prev + SECTOR_SIZE as u32 <= cur);
        }
    }

    #[test]
    fn test_block_regions_never_overlap() {
        for run in 1..NUM_RUNS {
            let prev = run_offset(FLASH_TARGET_OFFSET, run - 1, BLOCK_BUF_SIZE);
            let cur = run_offset(FLASH_TARGET_OFFSET, run, BLOCK_BUF_SIZE);
            assert!(prev + BLOCK_BUF_SIZE as u32 <= cur);
        }
    }

    #[test]
    fn test_every_region_stays_on_device() {
        for run in 0..NUM_RUNS {
            let sector_end = run_offset(FLASH_TARGET_OFFSET, run, SECTOR_SIZE) as usize + SECTOR_SIZE;
            let block_end = run_offset(FLASH_TARGET_OFFSET, run, BLOCK_BUF_SIZE) as usize + BLOCK_BUF_SIZE;
            assert!(sector_end <= FLASH_SIZE);
            assert!(block_end <= FLASH_SIZE);
        }
    }

    #[test]
    fn test_fixed_page_offset_is_base() {
        // The page program phase always programs at the window base.
        assert_eq!(run_offset(FLASH_TARGET_OFFSET, 0, 0), FLASH_TARGET_OFFSET);
    }
}
