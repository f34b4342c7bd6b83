//! One-time initialization container.
//!
//! [`OnceLock<T>`] holds a value written exactly once and read for the
//! rest of the kernel's lifetime. The write happens during single-threaded
//! boot, but the implementation stays sound under concurrency: the state
//! transition is a CAS, so a second writer loses rather than races.

use core::cell::UnsafeCell;
use core::mem::MaybeUninit;
use core::sync::atomic::{AtomicU8, Ordering};

const UNINIT: u8 = 0;
const WRITING: u8 = 1;
const READY: u8 = 2;

pub struct OnceLock<T> {
    state: AtomicU8,
    value: UnsafeCell<MaybeUninit<T>>,
}

// SAFETY: the CAS on `state` gives the single winning writer exclusive
// access to `value`; readers only touch it after observing READY.
unsafe impl<T: Send + Sync> Send for OnceLock<T> {}
unsafe impl<T: Send + Sync> Sync for OnceLock<T> {}

impl<T> OnceLock<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(UNINIT),
            value: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }

    /// Store `value` if the lock is still empty.
    ///
    /// Returns `Err(value)` if a value is already present or being
    /// written, handing the rejected value back to the caller.
    pub fn set(&self, value: T) -> Result<(), T> {
        if self
            .state
            .compare_exchange(UNINIT, WRITING, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(value);
        }
        // SAFETY: the CAS above makes us the only writer.
        unsafe { (*self.value.get()).write(value) };
        self.state.store(READY, Ordering::Release);
        Ok(())
    }

    /// The stored value, or `None` if nothing has been stored yet.
    pub fn get(&self) -> Option<&T> {
        if self.state.load(Ordering::Acquire) != READY {
            return None;
        }
        // SAFETY: READY is only published after the value is written, and
        // the value is never written again.
        Some(unsafe { (*self.value.get()).assume_init_ref() })
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.state.load(Ordering::Acquire) == READY
    }
}

impl<T> Default for OnceLock<T> {
    fn default() -> Self {
        Self::new()
    }
}
