//! Builders for synthetic MP tables used across the unit tests.

use std::vec::Vec;

use crate::checksum::checksum;
use crate::config::{CONFIG_SIGNATURE, MpConfigHeader};

/// Zero the header checksum field and recompute it so the byte-sum over
/// the declared length (clamped to the buffer) is 0.
pub fn fix_table_checksum(table: &mut [u8]) {
    table[7] = 0;
    let declared = u16::from_le_bytes([table[4], table[5]]) as usize;
    let extent = declared.min(table.len());
    let fixup = 0u8.wrapping_sub(checksum(&table[..extent]));
    table[7] = fixup;
}

/// A config table with the given version, the given entry records
/// appended verbatim, a valid checksum, and a local-APIC base of
/// 0xFEE0_0000.
pub fn table_with_entries(version: u8, entries: &[Vec<u8>]) -> Vec<u8> {
    let mut table = Vec::new();
    table.extend_from_slice(CONFIG_SIGNATURE);
    table.extend_from_slice(&0u16.to_le_bytes()); // length, patched below
    table.push(version);
    table.push(0); // checksum, patched below
    table.extend_from_slice(&[0u8; 20]); // product
    table.extend_from_slice(&0u32.to_le_bytes()); // oem table addr
    table.extend_from_slice(&0u16.to_le_bytes()); // oem table len
    table.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    table.extend_from_slice(&0xFEE0_0000u32.to_le_bytes()); // lapic base
    table.extend_from_slice(&0u16.to_le_bytes()); // ext length
    table.push(0); // ext checksum
    table.push(0); // reserved
    assert_eq!(table.len(), MpConfigHeader::SIZE);

    for entry in entries {
        table.extend_from_slice(entry);
    }
    let length = table.len() as u16;
    table[4..6].copy_from_slice(&length.to_le_bytes());
    fix_table_checksum(&mut table);
    table
}

/// A 20-byte processor entry (tag 0).
pub fn processor_entry(apic_id: u8, flags: u8) -> Vec<u8> {
    let mut entry = Vec::from([0u8, apic_id, 0x14, flags]);
    entry.extend_from_slice(b"GenP"); // cpu signature, arbitrary
    entry.extend_from_slice(&0u32.to_le_bytes()); // feature flags
    entry.extend_from_slice(&[0u8; 8]);
    assert_eq!(entry.len(), 20);
    entry
}

/// An 8-byte I/O APIC entry (tag 2).
pub fn ioapic_entry(apic_id: u8) -> Vec<u8> {
    let mut entry = Vec::from([2u8, apic_id, 0x11, 0x01]);
    entry.extend_from_slice(&0xFEC0_0000u32.to_le_bytes());
    assert_eq!(entry.len(), 8);
    entry
}

/// An 8-byte record with an arbitrary tag and zero payload; covers the
/// bus and interrupt-assignment kinds the parser skips over.
pub fn skipped_entry(tag: u8) -> Vec<u8> {
    let mut entry = Vec::from([tag]);
    entry.extend_from_slice(&[0u8; 7]);
    entry
}
