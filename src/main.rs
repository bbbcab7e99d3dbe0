#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod app {
    use core::arch::global_asm;
    use core::panic::PanicInfo;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use cstart::arch::intrinsic::stop_cpu;

    #[cfg(target_arch = "aarch64")]
    global_asm!(include_str!("entry-aarch64.S"));
    #[cfg(target_arch = "arm")]
    global_asm!(include_str!("entry-arm.S"));

    // Zero-initialized, so it is placed in .bss and only reads 0 if _cstart ran.
    static RUNS: AtomicUsize = AtomicUsize::new(0);

    #[no_mangle]
    pub extern "C" fn main() {
        if RUNS.fetch_add(1, Ordering::Relaxed) != 0 {
            // Dirty .bss: never return, so the ACT LED stays dark.
            stop_cpu();
        }
    }

    #[panic_handler]
    fn panic(_info: &PanicInfo) -> ! {
        stop_cpu()
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!(
        "cstart-demo only boots bare metal: build it with --target aarch64-unknown-none (raspi3) \
         or an ARMv6 none target such as armv6-none-eabihf (raspi1)"
    );
}
