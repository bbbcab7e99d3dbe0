use crate::arch::intrinsic::addr::{GPCLR0, GPFSEL0, GPSET0};
use crate::arch::intrinsic::gpio::*;

use super::{Mmio, StatusLed};

/// An LED wired straight to a BCM283x GPIO pin.
pub struct GpioLed<B> {
    bus: B,
    base: usize,
    pin: u8,
    active_low: bool,
}

impl<B: Mmio> GpioLed<B> {
    /// `base` is the GPIO block address, i.e. MMIO base + `GPIO_OFFSET`.
    pub const fn new(bus: B, base: usize, pin: u8) -> Self {
        Self {
            bus,
            base,
            pin,
            active_low: false,
        }
    }

    /// For LEDs that light when the pin is pulled low.
    pub fn active_low(mut self) -> Self {
        self.active_low = true;
        self
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn set_output(&mut self) {
        debug_assert!(self.pin < GPIO_PIN_COUNT);
        // 10 pins per GPFSEL register, 3 bits each.
        let reg = self.base + GPFSEL0 + 4 * (self.pin as usize / 10);
        let shift = 3 * (self.pin as u32 % 10);
        let mut fsel = self.bus.read(reg);
        fsel &= !(GPIO_FUNC_MASK << shift);
        fsel |= GPIO_FUNC_OUTPUT << shift;
        self.bus.write(reg, fsel);
    }

    pub fn set(&mut self, on: bool) {
        // GPSET/GPCLR are write-1-to-act, so no read-modify-write.
        let bank = if on != self.active_low { GPSET0 } else { GPCLR0 };
        let reg = self.base + bank + 4 * (self.pin as usize / 32);
        self.bus.write(reg, 1 << (self.pin as u32 % 32));
    }
}

impl<B: Mmio> StatusLed for GpioLed<B> {
    fn assert_success(&mut self) {
        self.set_output();
        self.set(true);
    }
}
