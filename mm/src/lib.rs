//! MossOS memory management.
//!
//! Early boot only needs one thing from this crate: translating the
//! physical addresses that firmware tables hand us into pointers the
//! kernel can actually read, via the bootloader-provided higher-half
//! direct map.

#![no_std]

pub mod hhdm;
