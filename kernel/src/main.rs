#![no_std]
#![no_main]

use core::panic::PanicInfo;

use mossos_lib::{cpu, klog_error, klog_info};

/// Kernel entry point, reached from the bootloader with interrupts off
/// and the Limine responses populated.
#[unsafe(no_mangle)]
unsafe extern "C" fn kmain() -> ! {
    mossos_boot::early_init();

    // AP startup and IOAPIC programming will consume the topology from
    // here; until they exist, park the boot CPU.
    match mossos_boot::topology() {
        Some(topology) => klog_info!("KERNEL: idle, {} CPUs known", topology.cpu_count()),
        None => klog_error!("KERNEL: boot finished without a topology"),
    }

    cpu::halt_loop();
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    klog_error!("KERNEL PANIC: {info}");
    cpu::halt_loop();
}
