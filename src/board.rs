//! ACT LED wiring of the Raspberry Pi selected at build time.
//!
//! `raspi1` wins when both board features are enabled.

use crate::driver::Volatile;

#[cfg(feature = "raspi1")]
mod imp {
    use super::Volatile;
    use crate::arch::intrinsic::addr::{BCM2835_MMIO_BASE, GPIO_OFFSET};
    use crate::driver::gpio::GpioLed;

    pub const MMIO_BASE: usize = BCM2835_MMIO_BASE;
    pub const ACT_LED_PIN: u8 = 47;

    pub type ActLed = GpioLed<Volatile>;

    pub(super) fn make(bus: Volatile) -> ActLed {
        GpioLed::new(bus, MMIO_BASE + GPIO_OFFSET, ACT_LED_PIN)
    }
}

#[cfg(all(feature = "raspi3", not(feature = "raspi1")))]
mod imp {
    use super::Volatile;
    use crate::arch::intrinsic::addr::{BCM2837_MMIO_BASE, VIDEOCORE_MBOX_OFFSET};
    use crate::arch::intrinsic::mbox::EXPANDER_ACT_LED;
    use crate::driver::mbox::MboxLed;

    pub const MMIO_BASE: usize = BCM2837_MMIO_BASE;

    pub type ActLed = MboxLed<Volatile>;

    pub(super) fn make(bus: Volatile) -> ActLed {
        MboxLed::new(bus, MMIO_BASE + VIDEOCORE_MBOX_OFFSET, EXPANDER_ACT_LED)
    }
}

pub use imp::*;

/// # Safety
///
/// Only valid on the board the crate was built for.
pub unsafe fn act_led() -> ActLed {
    imp::make(Volatile::new())
}
