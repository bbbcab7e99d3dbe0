#[cfg(any(target_arch = "aarch64", target_arch = "arm"))]
use core::arch::asm;
use core::ptr::{read_volatile, write_volatile};

/* Some useful functions for the Raspberry Pi cores. */

#[inline(always)]
pub fn stop_cpu() -> ! {
    loop {
        wait_for_event();
    }
}

#[inline(always)]
pub fn wait_for_event() {
    #[cfg(any(target_arch = "aarch64", target_arch = "arm"))]
    unsafe {
        asm!("wfe", options(nomem, nostack, preserves_flags));
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "arm")))]
    core::hint::spin_loop();
}

// Without the `nomem` option, `asm!` already acts as a compiler barrier, so only
// the architectural barrier needs to be spelled out.
#[inline(always)]
pub fn dsb_sy() {
    #[cfg(target_arch = "aarch64")]
    unsafe {
        asm!("dsb sy", options(nostack, preserves_flags));
    }
    #[cfg(not(target_arch = "aarch64"))]
    core::sync::atomic::fence(core::sync::atomic::Ordering::SeqCst);
}

// Device memory. With the MMU off every access is already strongly ordered, so
// `get/put_u32` need no barriers of their own.
//
// # Safety
//
// `address` must be a valid, 4-byte aligned device register (or RAM word).
#[inline(always)]
pub unsafe fn put_u32(address: usize, value: u32) {
    write_volatile(address as *mut u32, value);
}

#[inline(always)]
pub unsafe fn get_u32(address: usize) -> u32 {
    read_volatile(address as *const u32)
}

pub mod addr {
    pub const BCM2835_MMIO_BASE: usize = 0x2000_0000;
    pub const BCM2837_MMIO_BASE: usize = 0x3F00_0000;

    // GPIO, relative to the MMIO base.
    pub const GPIO_OFFSET: usize = 0x20_0000;
    pub const GPFSEL0: usize = 0x00;
    pub const GPSET0: usize = 0x1C;
    pub const GPCLR0: usize = 0x28;

    // VideoCore mailbox 0, relative to the MMIO base.
    pub const VIDEOCORE_MBOX_OFFSET: usize = 0xB880;
    pub const MBOX_READ: usize = 0x00;
    pub const MBOX_STATUS: usize = 0x18;
    pub const MBOX_WRITE: usize = 0x20;
}

pub mod gpio {
    pub const GPIO_PIN_COUNT: u8 = 54;
    pub const GPIO_FUNC_OUTPUT: u32 = 0b001;
    pub const GPIO_FUNC_MASK: u32 = 0b111;
}

pub mod mbox {
    pub const MBOX_RESPONSE: u32 = 0x80000000;
    pub const MBOX_FULL: u32 = 0x80000000;
    pub const MBOX_EMPTY: u32 = 0x40000000;
    pub const MBOX_REQUEST: u32 = 0;
    pub const MBOX_CH_PROP: u8 = 8;

    // tags
    pub const MBOX_TAG_SET_GPIO_STATE: u32 = 0x38041;
    pub const MBOX_TAG_LAST: u32 = 0;

    // The green ACT LED sits on pin 130 of the Pi 3 firmware GPIO expander.
    pub const EXPANDER_ACT_LED: u32 = 130;
}
