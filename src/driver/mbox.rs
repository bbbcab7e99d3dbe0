use aligned::{Aligned, A16};

use crate::arch::intrinsic::addr::{MBOX_READ, MBOX_STATUS, MBOX_WRITE};
use crate::arch::intrinsic::dsb_sy;
use crate::arch::intrinsic::mbox::*;

use super::{Mmio, StatusLed};

const MESSAGE_WORDS: usize = 8;

/// An LED the VideoCore firmware drives for us, e.g. the Pi 3 ACT LED on the
/// GPIO expander.
pub struct MboxLed<B> {
    bus: B,
    base: usize,
    pin: u32,
    buf: Aligned<A16, [u32; MESSAGE_WORDS]>,
}

impl<B: Mmio> MboxLed<B> {
    /// `base` is the mailbox address, i.e. MMIO base + `VIDEOCORE_MBOX_OFFSET`.
    pub const fn new(bus: B, base: usize, pin: u32) -> Self {
        Self {
            bus,
            base,
            pin,
            buf: Aligned([0; MESSAGE_WORDS]),
        }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn message(&self) -> &[u32; MESSAGE_WORDS] {
        &self.buf
    }

    pub fn set(&mut self, on: bool) -> bool {
        self.buf[0] = (MESSAGE_WORDS * 4) as u32;
        self.buf[1] = MBOX_REQUEST;
        self.buf[2] = MBOX_TAG_SET_GPIO_STATE;
        self.buf[3] = 8;
        self.buf[4] = 0;
        self.buf[5] = self.pin;
        self.buf[6] = on as u32;
        self.buf[7] = MBOX_TAG_LAST;
        self.call(MBOX_CH_PROP)
    }

    fn call(&mut self, channel: u8) -> bool {
        let buf_addr = self.buf.as_ptr() as usize;
        // The VideoCore only sees the low 32 bits. Hosted test buses never
        // dereference the posted address.
        #[cfg(target_os = "none")]
        debug_assert!(buf_addr <= u32::MAX as usize);
        let message_addr = ((buf_addr & !0xf) | (channel as usize & 0xf)) as u32;
        dsb_sy();
        while self.bus.read(self.base + MBOX_STATUS) & MBOX_FULL != 0 {}
        self.bus.write(self.base + MBOX_WRITE, message_addr);
        loop {
            while self.bus.read(self.base + MBOX_STATUS) & MBOX_EMPTY != 0 {}
            if self.bus.read(self.base + MBOX_READ) == message_addr {
                dsb_sy();
                // The firmware rewrote the buffer behind the compiler's back.
                let code = unsafe { core::ptr::read_volatile(&self.buf[1]) };
                return code == MBOX_RESPONSE;
            }
        }
    }
}

impl<B: Mmio> StatusLed for MboxLed<B> {
    fn assert_success(&mut self) {
        if !self.set(true) {
            log::warn!("firmware rejected SET_GPIO_STATE for pin {}", self.pin);
        }
    }
}
