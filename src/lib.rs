//! Benchmark library - testable modules for the RAM vs flash benchmark.
//!
//! This library contains the pure logic that can be tested on the host
//! machine. The binary (`main.rs`) uses this library and adds the
//! embedded-specific code: peripheral init, the static buffers, and the
//! flash driver calls.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the
//! standard test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

// Compile-time benchmark parameters
pub mod config;

// Flash offset layout for the destructive phases
pub mod layout;

// Deterministic buffer contents
pub mod pattern;

// Report line rendering
pub mod report;

// Timing sample reduction
pub mod timing;
