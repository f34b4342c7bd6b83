//! Intel MultiProcessor configuration table parsing for MossOS.
//!
//! Pre-ACPI firmware describes the machine's processors and interrupt
//! controllers in the MP configuration table. This crate finds that table
//! in physical memory, validates it, and walks its entry stream into an
//! [`MpTopology`] the rest of the kernel consumes.
//!
//! # Architecture
//!
//! - [`checksum`]: the 8-bit byte-sum primitive every MP structure is
//!   validated with.
//! - [`floating`]: scan of the three firmware search regions for the MP
//!   Floating Pointer Structure.
//! - [`config`]: configuration-table header validation.
//! - [`parse`]: entry-stream walk producing the topology.
//! - [`discover`]: the scan → validate → parse pipeline plus IMCR
//!   programming.
//!
//! Parsing is pure and bounds-checked over byte slices; only the region
//! mapping in [`floating`] and [`config`] touches raw memory, and only
//! [`discover`] touches I/O ports.
//!
//! # Usage
//!
//! ```ignore
//! match mossos_mptable::discover() {
//!     Ok(topology) => { /* bring up topology.cpu_apic_ids() */ }
//!     Err(err) => { /* degrade to uniprocessor */ }
//! }
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod checksum;
pub mod config;
pub mod discover;
pub mod error;
pub mod floating;
pub mod parse;
pub mod topology;


#[cfg(test)]
pub(crate) mod testutil;

pub use discover::discover;
pub use error::MpError;
pub use topology::MpTopology;
