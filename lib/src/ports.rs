//! I/O port assignments used by the kernel, in one place.

/// Base of the first 16550 UART (COM1). The klog sink.
pub const COM1_BASE: u16 = 0x3F8;

/// Interrupt Mode Control Register select port. Writing
/// [`IMCR_SELECT_VALUE`] here exposes the IMCR data register on
/// [`IMCR_DATA`].
pub const IMCR_SELECT: u16 = 0x22;

/// IMCR data port, valid after a select write.
pub const IMCR_DATA: u16 = 0x23;

/// Value written to [`IMCR_SELECT`] to select the IMCR.
pub const IMCR_SELECT_VALUE: u8 = 0x70;

/// IMCR data bit that routes external interrupts to the APIC instead of
/// the legacy PIC.
pub const IMCR_APIC_MODE: u8 = 0x01;
