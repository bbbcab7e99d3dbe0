//! The C runtime start: zero `.bss`, hand control to `main`, then light the
//! completion LED.

use core::ptr::write_volatile;

use crate::driver::StatusLed;

pub mod region;

pub use region::{BssRegion, LayoutError, Word, WORD_SIZE};

/// Zero every word of `bss`, returning how many words were written.
///
/// Writes are volatile and counted rather than compared against `end`, so an
/// empty region (start == end) is never touched.
///
/// # Safety
///
/// `bss` must describe writable memory that no live reference points into.
pub unsafe fn clear_bss(bss: BssRegion) -> usize {
    let base = bss.start() as *mut Word;
    for i in 0..bss.len_words() {
        write_volatile(base.add(i), 0);
    }
    bss.len_words()
}

/// Clear `bss`, run `app` once, then assert `led` once.
///
/// Returns after the success signal; what happens next (idle, halt) is up to
/// the caller.
///
/// # Safety
///
/// Same contract as [`clear_bss`]. Must run exactly once per reset, on a
/// single core.
pub unsafe fn initialize_and_run<F, L>(bss: BssRegion, app: F, led: &mut L)
where
    F: FnOnce(),
    L: StatusLed + ?Sized,
{
    // The logger's own state lives in .bss: nothing may log before this.
    let cleared = clear_bss(bss);
    log::debug!("cleared {} bss words at {:#x}", cleared, bss.start());

    app();

    log::info!("main returned, asserting success");
    led.assert_success();
}

/// Called by `_start` in the entry trampoline once the stack is up.
///
/// # Safety
///
/// Only the reset trampoline may call this, once, with every other core parked.
#[cfg(all(target_os = "none", any(feature = "raspi1", feature = "raspi3")))]
#[no_mangle]
pub unsafe extern "C" fn _cstart() -> ! {
    extern "C" {
        fn main();
    }

    let bss = BssRegion::from_linker();
    let mut led = crate::board::act_led();
    initialize_and_run(bss, || unsafe { main() }, &mut led);

    crate::arch::intrinsic::stop_cpu()
}
