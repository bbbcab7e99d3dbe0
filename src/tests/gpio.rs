use crate::driver::gpio::GpioLed;
use crate::driver::StatusLed;

use super::support::FakeBus;

const GPIO: usize = 0x2020_0000;
const GPFSEL1: usize = GPIO + 0x04;
const GPFSEL4: usize = GPIO + 0x10;
const GPSET1: usize = GPIO + 0x20;
const GPCLR0: usize = GPIO + 0x28;
const GPCLR1: usize = GPIO + 0x2C;

#[test]
fn act_led_on_pin_47() {
    let mut led = GpioLed::new(FakeBus::default().with(GPFSEL4, 0xffff_ffff), GPIO, 47);
    led.assert_success();

    // Pin 47 owns bits 21..24 of GPFSEL4; the neighbours keep their function.
    assert_eq!(led.bus().reg(GPFSEL4), !(0b111 << 21) | (0b001 << 21));
    assert_eq!(led.bus().writes.last(), Some(&(GPSET1, 1 << 15)));
    assert_eq!(led.bus().writes.len(), 2);
}

#[test]
fn active_low_led_pulls_the_pin_down() {
    let mut led = GpioLed::new(FakeBus::default(), GPIO, 16).active_low();
    led.assert_success();

    assert_eq!(led.bus().reg(GPFSEL1), 0b001 << 18);
    assert_eq!(led.bus().writes.last(), Some(&(GPCLR0, 1 << 16)));
}

#[test]
fn switching_off_uses_the_clear_bank() {
    let mut led = GpioLed::new(FakeBus::default(), GPIO, 47);
    led.set(false);
    assert_eq!(led.bus().writes, [(GPCLR1, 1 << 15)]);
}
