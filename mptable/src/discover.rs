//! The scan → validate → parse pipeline.

use mossos_lib::klog_info;
use mossos_lib::ports::{IMCR_APIC_MODE, IMCR_DATA, IMCR_SELECT, IMCR_SELECT_VALUE};
use x86_64::instructions::port::Port;

use crate::config;
use crate::error::MpError;
use crate::floating;
use crate::parse;
use crate::topology::MpTopology;

/// Discover the machine's SMP topology from the MP configuration table.
///
/// Runs exactly once, early in boot, before any other execution context
/// exists. Each stage's failure aborts the pipeline; nothing is retried
/// and no partial topology is produced. The caller owns the policy for
/// failures — this function never halts.
pub fn discover() -> Result<MpTopology, MpError> {
    let fp = floating::find_floating_pointer().ok_or(MpError::NotFound)?;
    let table = config::validate_table(&fp)?;

    let version = table.version();
    let declared = table.declared_entry_count();
    klog_info!(
        "MP: config table rev {}, {} bytes, {} declared entries",
        version,
        table.length(),
        declared
    );

    let topology = parse::parse_entries(table.entries(), table.lapic_base())?;

    if fp.imcr_present() {
        // SAFETY: chipset IMCR ports; the write sequence is a no-op on
        // hardware that does not implement the register.
        unsafe { route_through_apic() };
    }

    Ok(topology)
}

/// Select the IMCR and flip it to APIC mode, taking the legacy PIC out of
/// the interrupt path.
unsafe fn route_through_apic() {
    let mut select: Port<u8> = Port::new(IMCR_SELECT);
    let mut data: Port<u8> = Port::new(IMCR_DATA);
    unsafe {
        select.write(IMCR_SELECT_VALUE);
        let current = data.read();
        data.write(current | IMCR_APIC_MODE);
    }
}
