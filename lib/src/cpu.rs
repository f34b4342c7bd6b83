//! Thin wrappers over privileged CPU instructions.

use x86_64::instructions::{hlt, interrupts};

#[inline]
pub fn disable_interrupts() {
    interrupts::disable();
}

#[inline]
pub fn enable_interrupts() {
    interrupts::enable();
}

/// Halt forever. The terminal state of the boot CPU on fatal errors and
/// after the kernel has nothing left to do.
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
