//! Higher Half Direct Map (HHDM) translation.
//!
//! Limine maps all physical memory at a fixed offset in the higher half.
//! This module stores that offset, once, and is the single place physical
//! addresses get turned into dereferenceable virtual ones.

use mossos_abi::addr::{PhysAddr, VirtAddr};
use mossos_lib::{OnceLock, klog_warn};

static HHDM_OFFSET: OnceLock<u64> = OnceLock::new();

/// Record the HHDM offset reported by the bootloader. First caller wins;
/// a second call is a boot-sequence bug and is logged and ignored.
pub fn init(offset: u64) {
    if HHDM_OFFSET.set(offset).is_err() {
        klog_warn!("HHDM: init called twice, keeping first offset");
    }
}

#[inline]
pub fn is_available() -> bool {
    HHDM_OFFSET.is_set()
}

/// The raw HHDM offset, if the bootloader provided one.
#[inline]
pub fn try_offset() -> Option<u64> {
    HHDM_OFFSET.get().copied()
}

/// HHDM translation methods for [`PhysAddr`].
pub trait PhysAddrHhdm {
    /// Translate to a virtual address through the HHDM. `None` if the
    /// HHDM is unavailable or the translation would overflow.
    fn try_to_virt(self) -> Option<VirtAddr>;
}

impl PhysAddrHhdm for PhysAddr {
    fn try_to_virt(self) -> Option<VirtAddr> {
        let offset = try_offset()?;
        self.as_u64().checked_add(offset).map(VirtAddr::new)
    }
}
