#![no_std]

pub mod early_init;
pub mod limine_protocol;
pub mod smp;

#[cfg(feature = "builtin-tests")]
pub mod builtin_tests;

pub use early_init::early_init;
pub use smp::topology;
