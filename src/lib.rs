//! Bare-metal C runtime start for the Raspberry Pi.
//!
//! `_start` (`entry-aarch64.S` or `entry-arm.S`) parks any secondary cores,
//! sets up a stack and jumps to `_cstart` in [`boot`], which zeroes `.bss`,
//! runs the application's `main` and lights the ACT LED once `main` returns.

#![cfg_attr(not(test), no_std)]

pub mod arch;
#[cfg(any(feature = "raspi1", feature = "raspi3"))]
pub mod board;
pub mod boot;
pub mod driver;

pub use boot::{clear_bss, initialize_and_run, BssRegion, LayoutError};
pub use driver::StatusLed;

#[cfg(test)]
mod tests;
