//! MossOS shared kernel type vocabulary.
//!
//! Types and constants every kernel crate agrees on. Keeping them in one
//! leaf crate avoids duplicate definitions and dependency cycles between
//! the memory, firmware-table, and boot crates.

#![no_std]
#![forbid(unsafe_code)]

pub mod addr;

/// Upper bound on the number of processors the kernel will manage.
///
/// Legacy MP-configuration-table systems identify processors with 8-bit
/// APIC ids; 32 comfortably covers every machine this kernel targets.
pub const MAX_CPUS: usize = 32;

pub use addr::{PhysAddr, VirtAddr};
