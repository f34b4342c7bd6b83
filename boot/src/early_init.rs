//! Early boot sequence.
//!
//! Runs on the bootstrap processor, interrupts off, before anything else
//! in the kernel. Order matters: logging needs nothing, the HHDM needs
//! the bootloader response, and MP discovery needs the HHDM.

use mossos_lib::{cpu, klog_info, klog_warn};
use mossos_mm::hhdm;

use crate::limine_protocol;
use crate::smp;

/// Take the kernel from "just entered Rust" to "topology known".
pub fn early_init() {
    cpu::disable_interrupts();
    mossos_lib::klog_init();
    klog_info!("BOOT: MossOS starting");

    if !limine_protocol::base_revision_supported() {
        klog_warn!("BOOT: bootloader base revision not supported, continuing anyway");
    }

    match limine_protocol::hhdm_offset() {
        Some(offset) => {
            hhdm::init(offset);
            klog_info!("BOOT: HHDM at offset 0x{offset:x}");
        }
        None => {
            klog_warn!("BOOT: no HHDM response; MP discovery will come up empty");
        }
    }

    smp::smp_init();

    #[cfg(feature = "builtin-tests")]
    builtin_tests_pass();
}

#[cfg(feature = "builtin-tests")]
fn builtin_tests_pass() {
    use mossos_lib::KlogLevel;

    // Per-test lines log at debug.
    mossos_lib::klog_set_level(KlogLevel::Debug);
    klog_info!("BOOT: running builtin tests");
    crate::builtin_tests::run_all();
    mossos_lib::klog_set_level(KlogLevel::Info);
}
