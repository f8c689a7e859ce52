//! RAM vs flash write timing benchmark for the Raspberry Pi Pico (RP2040).
//!
//! Runs once after power-up: times sequential writes over a 10 KiB RAM
//! buffer, flash sector erases, repeated programming of a single 256 B
//! page, and erase-then-program cycles over 32 KiB blocks. Per-run
//! timings and their means are printed over the debug console, then the
//! core parks in an idle loop.
//!
//! # Flash usage
//!
//! The flash phases are destructive. They erase and program the window
//! starting 1 MiB into the 2 MiB part, stepping to a fresh sector or
//! block on every repetition. Nothing below the 1 MiB mark is touched.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[cfg(target_arch = "arm")]
mod firmware {
    use defmt::{debug, info, warn};
    use embassy_executor::Spawner;
    use embassy_rp::flash::{Blocking, Flash};
    use embassy_rp::peripherals::FLASH;
    use embassy_time::{Instant, Timer};
    use static_cell::ConstStaticCell;
    use {defmt_rtt as _, panic_probe as _};

    use flashbench_pico::config::{
        BLOCK_BUF_SIZE,
        BLOCK_REPORTED_RUNS,
        ERASE_REPORTED_RUNS,
        FLASH_SIZE,
        FLASH_TARGET_OFFSET,
        NUM_RUNS,
        PAGE_SIZE,
        PAGE_REPORTED_RUNS,
        RAM_BUF_SIZE,
        RAM_REPORTED_RUNS,
        SECTOR_SIZE,
        STARTUP_DELAY_MS,
    };
    use flashbench_pico::{layout, pattern, report};

    /// The configured sector size must match the driver's erase unit.
    const _: () = assert!(SECTOR_SIZE == embassy_rp::flash::ERASE_SIZE);

    type BenchFlash<'d> = Flash<'d, FLASH, Blocking, FLASH_SIZE>;

    // Program metadata for `picotool info`
    #[unsafe(link_section = ".bi_entries")]
    #[used]
    pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
        embassy_rp::binary_info::rp_program_name!(c"flashbench"),
        embassy_rp::binary_info::rp_program_description!(c"RAM vs flash write timing benchmark"),
        embassy_rp::binary_info::rp_cargo_version!(),
        embassy_rp::binary_info::rp_program_build_attribute!(),
    ];

    // =============================================================================
    // Test Buffers (process-wide, initialized once in main, never resized)
    // =============================================================================

    /// RAM write test buffer (10 KiB). The RAM phase is its only writer.
    static RAM_BUF: ConstStaticCell<[u8; RAM_BUF_SIZE]> = ConstStaticCell::new([0; RAM_BUF_SIZE]);

    /// Program source for the page program phase (one page).
    static PAGE_BUF: ConstStaticCell<[u8; PAGE_SIZE]> = ConstStaticCell::new([0; PAGE_SIZE]);

    /// Program source for the block program phase (32 KiB).
    static BLOCK_BUF: ConstStaticCell<[u8; BLOCK_BUF_SIZE]> = ConstStaticCell::new([0; BLOCK_BUF_SIZE]);

    // =============================================================================
    // Measurement Phases
    // =============================================================================

    /// Phase 1: overwrite every byte of the RAM buffer, once per repetition.
    fn ram_write_phase(buf: &mut [u8; RAM_BUF_SIZE]) -> [i64; NUM_RUNS] {
        debug!("RAM write phase: {} runs over {} bytes", NUM_RUNS, RAM_BUF_SIZE);

        let mut times_us = [0i64; NUM_RUNS];
        for run in 0..NUM_RUNS {
            let t0 = Instant::now();
            pattern::fill(buf);
            times_us[run] = t0.elapsed().as_micros() as i64;
            // Keep the optimizer from collapsing repeated fills
            core::hint::black_box(&buf);
        }
        times_us
    }

    /// Phase 2: erase one sector per repetition, a fresh sector each time.
    ///
    /// Interrupts stay disabled for the duration of the erase call; the
    /// timestamps bracket the critical section.
    fn flash_erase_phase(flash: &mut BenchFlash<'_>) -> [i64; NUM_RUNS] {
        debug!("Flash erase phase: {} runs, one sector each", NUM_RUNS);

        let mut times_us = [0i64; NUM_RUNS];
        for run in 0..NUM_RUNS {
            // Step to a fresh sector so one cell is not worn repeatedly
            let offset = layout::run_offset(FLASH_TARGET_OFFSET, run, SECTOR_SIZE);
            let t0 = Instant::now();
            critical_section::with(|_| flash.blocking_erase(offset, offset + SECTOR_SIZE as u32))
                .unwrap();
            times_us[run] = t0.elapsed().as_micros() as i64;
        }
        times_us
    }

    /// Phase 3: program the same page on every repetition.
    ///
    /// The sector is erased once, untimed, before the loop and never
    /// re-erased between runs: only the first repetition programs erased
    /// flash, the rest program over already-programmed bits. That is the
    /// behavior under measurement.
    fn flash_page_program_phase(
        flash: &mut BenchFlash<'_>,
        page: &[u8; PAGE_SIZE],
    ) -> [i64; NUM_RUNS] {
        debug!("Flash page program phase: {} runs at fixed offset", NUM_RUNS);

        critical_section::with(|_| {
            flash.blocking_erase(FLASH_TARGET_OFFSET, FLASH_TARGET_OFFSET + SECTOR_SIZE as u32)
        })
        .unwrap();

        let mut times_us = [0i64; NUM_RUNS];
        for run in 0..NUM_RUNS {
            let t0 = Instant::now();
            critical_section::with(|_| flash.blocking_write(FLASH_TARGET_OFFSET, page)).unwrap();
            times_us[run] = t0.elapsed().as_micros() as i64;
        }
        times_us
    }

    /// Phase 4: erase-then-program a fresh 32 KiB block per repetition.
    ///
    /// The erase is setup and stays outside the timed region; only the
    /// full-block program call is measured.
    fn flash_block_program_phase(
        flash: &mut BenchFlash<'_>,
        block: &[u8; BLOCK_BUF_SIZE],
    ) -> [i64; NUM_RUNS] {
        debug!("Flash block program phase: {} runs, {} bytes each", NUM_RUNS, BLOCK_BUF_SIZE);

        let mut times_us = [0i64; NUM_RUNS];
        for run in 0..NUM_RUNS {
            let offset = layout::run_offset(FLASH_TARGET_OFFSET, run, BLOCK_BUF_SIZE);
            critical_section::with(|_| flash.blocking_erase(offset, offset + BLOCK_BUF_SIZE as u32))
                .unwrap();

            let t0 = Instant::now();
            critical_section::with(|_| flash.blocking_write(offset, block)).unwrap();
            times_us[run] = t0.elapsed().as_micros() as i64;
        }
        times_us
    }

    // =============================================================================
    // Reporting
    // =============================================================================

    /// Emit one phase's report line over the console.
    fn print_phase(
        label: &str,
        times_us: &[i64],
    ) {
        let line = report::phase_line(label, times_us);
        info!("{=str}", line.as_str());
    }

    /// Read the fixed page back and compare it against the program source.
    fn verify_page_readback(
        flash: &mut BenchFlash<'_>,
        page: &[u8; PAGE_SIZE],
    ) {
        let mut readback = [0u8; PAGE_SIZE];
        flash.blocking_read(FLASH_TARGET_OFFSET, &mut readback).unwrap();
        if readback != *page {
            warn!("page readback mismatch at 0x{=u32:x}", FLASH_TARGET_OFFSET);
        }
    }

    #[embassy_executor::main]
    async fn main(_spawner: Spawner) {
        let p = embassy_rp::init(Default::default());

        // Give an attached terminal time to connect before the first line
        Timer::after_millis(STARTUP_DELAY_MS).await;
        info!("--- Iniciando Benchmark de RAM e Flash ---");

        let ram_buf = RAM_BUF.take();
        let page_buf = PAGE_BUF.take();
        let block_buf = BLOCK_BUF.take();

        // Program sources are filled once here and stay read-only for the
        // rest of the run; the flash phases never mutate them.
        pattern::fill(page_buf);
        pattern::fill(block_buf);
        defmt::assert!(pattern::verify(page_buf), "page buffer pattern");
        defmt::assert!(pattern::verify(block_buf), "block buffer pattern");

        let mut flash = Flash::<_, Blocking, FLASH_SIZE>::new_blocking(p.FLASH);

        let ram_times = ram_write_phase(ram_buf);
        print_phase("RAM write (10 KB):", &ram_times[..RAM_REPORTED_RUNS]);

        let erase_times = flash_erase_phase(&mut flash);
        print_phase("Flash ERASE (4 KB):", &erase_times[..ERASE_REPORTED_RUNS]);

        let page_times = flash_page_program_phase(&mut flash, page_buf);
        verify_page_readback(&mut flash, page_buf);
        print_phase("Flash PROGRAM (256 B):", &page_times[..PAGE_REPORTED_RUNS]);

        let block_times = flash_block_program_phase(&mut flash, block_buf);
        print_phase("Flash PROGRAM (32 KB):", &block_times[..BLOCK_REPORTED_RUNS]);

        info!("--- Benchmark Concluído ---");

        // Results are out; park the core
        loop {
            cortex_m::asm::wfi();
        }
    }
}

/// Placeholder entry point for non-ARM targets, so the host toolchain can
/// build and test the crate.
#[cfg(not(target_arch = "arm"))]
fn main() {}
