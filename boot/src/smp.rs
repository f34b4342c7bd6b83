//! SMP topology discovery driver.
//!
//! Runs the MP-table pipeline once, applies the failure policy, and
//! keeps the result as the kernel's single process-wide copy. Later
//! stages (AP bring-up, IOAPIC setup) read it through [`topology`] and
//! must never write to it.

use mossos_abi::MAX_CPUS;
use mossos_lib::{OnceLock, klog_info, klog_warn};
use mossos_mptable::{MpError, MpTopology, discover};

static TOPOLOGY: OnceLock<MpTopology> = OnceLock::new();

/// Discover the SMP topology and record it.
///
/// Failure policy: every discovery error degrades to a uniprocessor
/// topology instead of halting. A machine without a valid MP table is
/// either genuinely single-processor or has firmware we cannot trust;
/// in both cases the right move is to boot on the CPU we are already
/// running on. Callers that require SMP can inspect the result and
/// halt themselves.
pub fn smp_init() {
    let topology = match discover() {
        Ok(topology) => topology,
        Err(err @ MpError::NotFound) => {
            klog_info!("MP: {err}; assuming uniprocessor");
            MpTopology::uniprocessor()
        }
        Err(err) => {
            klog_warn!("MP: discovery failed ({err}); degrading to uniprocessor");
            MpTopology::uniprocessor()
        }
    };

    log_topology(&topology);

    if TOPOLOGY.set(topology).is_err() {
        klog_warn!("MP: smp_init ran twice, keeping first topology");
    }
}

/// The discovered topology. `None` until [`smp_init`] has run.
pub fn topology() -> Option<&'static MpTopology> {
    TOPOLOGY.get()
}

fn log_topology(topology: &MpTopology) {
    klog_info!(
        "MP: {} CPUs, local APIC {}",
        topology.cpu_count(),
        topology.lapic_base()
    );
    for &apic_id in topology.cpu_apic_ids() {
        let role = if topology.bsp_apic_id() == Some(apic_id) {
            "bsp"
        } else {
            "ap"
        };
        klog_info!("MP: CPU apic 0x{apic_id:x} ({role})");
    }
    if topology.dropped_cpus() > 0 {
        klog_warn!(
            "MP: {} CPUs beyond the {}-CPU limit were ignored",
            topology.dropped_cpus(),
            MAX_CPUS
        );
    }
    match topology.ioapic_id() {
        Some(id) => klog_info!("MP: IOAPIC id 0x{id:x}"),
        None => klog_info!("MP: no IOAPIC reported"),
    }
}
