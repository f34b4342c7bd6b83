//! Kernel logging.
//!
//! Every log line goes out COM1 through a `uart_16550` driver behind a
//! spinlock. The boot path is single-threaded, but the lock keeps the
//! writer sound once additional CPUs exist and costs nothing before then.
//!
//! The UART is initialised lazily on the first line logged, so the
//! `klog_*!` macros work from the very first instruction of `kmain`
//! without an explicit driver bring-up step.

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicU8, Ordering};

use spin::Mutex;
use uart_16550::SerialPort;

use crate::ports::COM1_BASE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum KlogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl KlogLevel {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => KlogLevel::Error,
            1 => KlogLevel::Warn,
            2 => KlogLevel::Info,
            3 => KlogLevel::Debug,
            _ => KlogLevel::Trace,
        }
    }
}

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(KlogLevel::Info as u8);

static SERIAL: Mutex<Option<SerialPort>> = Mutex::new(None);

#[inline]
fn is_enabled(level: KlogLevel) -> bool {
    level as u8 <= CURRENT_LEVEL.load(Ordering::Relaxed)
}

/// Set the default level. Called very early in boot; harmless to skip.
pub fn klog_init() {
    CURRENT_LEVEL.store(KlogLevel::Info as u8, Ordering::Relaxed);
}

pub fn klog_set_level(level: KlogLevel) {
    CURRENT_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn klog_get_level() -> KlogLevel {
    KlogLevel::from_raw(CURRENT_LEVEL.load(Ordering::Relaxed))
}

/// Emit one formatted log line at the given level.
///
/// A trailing newline is appended here; format strings should not carry
/// their own.
pub fn log_args(level: KlogLevel, args: fmt::Arguments<'_>) {
    if !is_enabled(level) {
        return;
    }
    let mut guard = SERIAL.lock();
    let port = guard.get_or_insert_with(|| {
        // SAFETY: COM1_BASE is the standard COM1 port block; nothing else
        // drives it.
        let mut port = unsafe { SerialPort::new(COM1_BASE) };
        port.init();
        port
    });
    let _ = port.write_fmt(args);
    let _ = port.write_str("\n");
}

#[macro_export]
macro_rules! klog_error {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Error, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_warn {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Warn, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_info {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Info, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_debug {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Debug, ::core::format_args!($($arg)*))
    };
}
