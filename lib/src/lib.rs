#![no_std]

pub mod cpu;
pub mod klog;
pub mod once_lock;
pub mod ports;
pub mod testing;

#[doc(hidden)]
pub use paste;

pub use klog::{KlogLevel, klog_get_level, klog_init, klog_set_level};
pub use once_lock::OnceLock;
pub use testing::{TestResult, TestSuiteResult};
