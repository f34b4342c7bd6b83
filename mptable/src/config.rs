//! MP configuration table validation.

use core::mem;
use core::ptr::read_unaligned;

use mossos_abi::addr::PhysAddr;
use mossos_lib::klog_warn;
use mossos_mm::hhdm;

use crate::checksum::checksum;
use crate::error::MpError;
use crate::floating::{MpFloatingPointer, phys_window};

pub const CONFIG_SIGNATURE: &[u8; 4] = b"PCMP";

/// The fixed 44-byte configuration table header, as firmware lays it out.
/// The entry stream follows immediately after, out to `length` bytes from
/// the table start.
#[repr(C, packed)]
#[derive(Clone, Copy, Debug)]
pub struct MpConfigHeader {
    pub signature: [u8; 4],
    /// Total bytes of header plus entry stream.
    pub length: u16,
    /// MP specification revision: 1 (1.1) or 4 (1.4).
    pub version: u8,
    /// Makes the byte-sum over `length` bytes come out to 0 mod 256.
    pub checksum: u8,
    pub product: [u8; 20],
    pub oem_table_addr: u32,
    pub oem_table_len: u16,
    pub entry_count: u16,
    /// Local APIC base physical address.
    pub lapic_addr: u32,
    pub ext_length: u16,
    pub ext_checksum: u8,
    pub reserved: u8,
}

impl MpConfigHeader {
    pub const SIZE: usize = mem::size_of::<Self>();

    /// Signature, version, and declared-length sanity, in the order a
    /// reader can check them without the full table mapped.
    fn check_prefix(&self) -> Result<(), MpError> {
        let signature = self.signature;
        if signature != *CONFIG_SIGNATURE {
            return Err(MpError::BadSignature);
        }
        let version = self.version;
        if version != 1 && version != 4 {
            return Err(MpError::BadVersion(version));
        }
        let length = self.length as usize;
        if length < Self::SIZE {
            return Err(MpError::BadLength(length));
        }
        Ok(())
    }
}

/// A validated configuration table: header fields plus the raw entry
/// stream, checksummed over the full declared length.
#[derive(Debug)]
pub struct MpConfigTable<'a> {
    header: MpConfigHeader,
    bytes: &'a [u8],
}

impl<'a> MpConfigTable<'a> {
    /// Validate a candidate table held in `bytes`.
    ///
    /// `bytes` must start at the table's first byte; it may extend past
    /// the declared length (the excess is ignored), but a declared length
    /// overrunning `bytes` is rejected rather than read through.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, MpError> {
        if bytes.len() < MpConfigHeader::SIZE {
            return Err(MpError::BadLength(bytes.len()));
        }
        // SAFETY: length checked; repr(C, packed), any bits are valid.
        let header = unsafe { read_unaligned(bytes.as_ptr() as *const MpConfigHeader) };
        header.check_prefix()?;
        let declared = header.length as usize;
        if declared > bytes.len() {
            return Err(MpError::BadLength(declared));
        }
        if checksum(&bytes[..declared]) != 0 {
            return Err(MpError::BadChecksum);
        }
        Ok(Self {
            header,
            bytes: &bytes[..declared],
        })
    }

    /// The entry stream: everything between the header and the declared
    /// table end.
    pub fn entries(&self) -> &'a [u8] {
        &self.bytes[MpConfigHeader::SIZE..]
    }

    pub fn version(&self) -> u8 {
        self.header.version
    }

    pub fn length(&self) -> usize {
        self.bytes.len()
    }

    /// Entry count the header claims. The parser walks the stream by
    /// record size and does not trust this number.
    pub fn declared_entry_count(&self) -> u16 {
        self.header.entry_count
    }

    pub fn lapic_base(&self) -> PhysAddr {
        PhysAddr::new(self.header.lapic_addr as u64)
    }
}

/// Follow a floating pointer to its configuration table and validate it.
pub fn validate_table(fp: &MpFloatingPointer) -> Result<MpConfigTable<'static>, MpError> {
    if fp.is_default_config() {
        return Err(MpError::NoConfigTable);
    }
    if !hhdm::is_available() {
        klog_warn!("MP: HHDM unavailable, cannot read config table");
        return Err(MpError::NoConfigTable);
    }

    let table_addr = fp.config_table_addr();
    let head = phys_window(table_addr, MpConfigHeader::SIZE).ok_or(MpError::NoConfigTable)?;
    // SAFETY: `head` is exactly SIZE bytes.
    let header = unsafe { read_unaligned(head.as_ptr() as *const MpConfigHeader) };
    header.check_prefix()?;

    let bytes =
        phys_window(table_addr, header.length as usize).ok_or(MpError::NoConfigTable)?;
    MpConfigTable::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{fix_table_checksum, table_with_entries};

    #[test]
    fn header_is_forty_four_bytes() {
        assert_eq!(MpConfigHeader::SIZE, 44);
    }

    #[test]
    fn accepts_well_formed_empty_table() {
        let table = table_with_entries(4, &[]);
        let parsed = MpConfigTable::from_bytes(&table).expect("valid table");
        assert_eq!(parsed.version(), 4);
        assert_eq!(parsed.entries().len(), 0);
        assert_eq!(parsed.length(), MpConfigHeader::SIZE);
    }

    #[test]
    fn accepts_version_one() {
        let table = table_with_entries(1, &[]);
        assert!(MpConfigTable::from_bytes(&table).is_ok());
    }

    #[test]
    fn rejects_bad_signature() {
        let mut table = table_with_entries(4, &[]);
        table[0] = b'X';
        fix_table_checksum(&mut table);
        assert_eq!(
            MpConfigTable::from_bytes(&table).unwrap_err(),
            MpError::BadSignature
        );
    }

    #[test]
    fn rejects_bad_version() {
        let table = table_with_entries(2, &[]);
        assert_eq!(
            MpConfigTable::from_bytes(&table).unwrap_err(),
            MpError::BadVersion(2)
        );
    }

    #[test]
    fn rejects_bad_checksum() {
        let mut table = table_with_entries(4, &[]);
        table[7] = table[7].wrapping_add(1);
        assert_eq!(
            MpConfigTable::from_bytes(&table).unwrap_err(),
            MpError::BadChecksum
        );
    }

    #[test]
    fn rejects_declared_length_past_buffer() {
        let mut table = table_with_entries(4, &[]);
        table[4] = (MpConfigHeader::SIZE + 8) as u8; // declared length
        fix_table_checksum(&mut table);
        assert_eq!(
            MpConfigTable::from_bytes(&table).unwrap_err(),
            MpError::BadLength(MpConfigHeader::SIZE + 8)
        );
    }

    #[test]
    fn rejects_declared_length_shorter_than_header() {
        let mut table = table_with_entries(4, &[]);
        table[4] = 8;
        fix_table_checksum(&mut table);
        assert_eq!(MpConfigTable::from_bytes(&table).unwrap_err(), MpError::BadLength(8));
    }

    #[test]
    fn zero_table_address_short_circuits() {
        // No config-table memory is ever touched: the error comes before
        // any translation or read.
        let fp = MpFloatingPointer {
            signature: *crate::floating::FP_SIGNATURE,
            table_addr: 0,
            length: 1,
            spec_rev: 4,
            checksum: 0,
            config_type: 0,
            imcr: 0,
            reserved: [0; 3],
        };
        assert_eq!(validate_table(&fp).unwrap_err(), MpError::NoConfigTable);
    }

    #[test]
    fn signature_outranks_version_and_checksum() {
        let mut table = table_with_entries(2, &[]);
        table[0] = b'X';
        table[7] = table[7].wrapping_add(1);
        assert_eq!(
            MpConfigTable::from_bytes(&table).unwrap_err(),
            MpError::BadSignature
        );
    }
}
