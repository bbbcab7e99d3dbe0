use crate::arch::intrinsic::{get_u32, put_u32};

pub mod gpio;
pub mod mbox;

/// The one output this stage drives: "everything ran".
pub trait StatusLed {
    fn assert_success(&mut self);
}

/// 32-bit register access, so drivers can run against a fake bus in tests.
pub trait Mmio {
    fn read(&mut self, addr: usize) -> u32;
    fn write(&mut self, addr: usize, value: u32);
}

/// The real bus: every access is a volatile load or store.
pub struct Volatile(());

impl Volatile {
    /// # Safety
    ///
    /// Every address later passed to `read`/`write` must be a mapped device
    /// register or valid RAM.
    pub const unsafe fn new() -> Self {
        Self(())
    }
}

impl Mmio for Volatile {
    fn read(&mut self, addr: usize) -> u32 {
        unsafe { get_u32(addr) }
    }

    fn write(&mut self, addr: usize, value: u32) {
        unsafe { put_u32(addr, value) }
    }
}
