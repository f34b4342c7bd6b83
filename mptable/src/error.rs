//! Failure kinds of the MP discovery pipeline.

use core::fmt;

/// Why MP topology discovery failed.
///
/// The pipeline never halts the machine itself; callers pick between
/// halting and degrading to a uniprocessor setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MpError {
    /// No valid floating pointer structure in any firmware search region.
    NotFound,
    /// Floating pointer found, but it advertises a default configuration
    /// instead of pointing at a config table.
    NoConfigTable,
    /// Config table signature is not `"PCMP"`.
    BadSignature,
    /// Config table version is neither 1 nor 4.
    BadVersion(u8),
    /// Declared table length is shorter than the header or overruns the
    /// mapped window.
    BadLength(usize),
    /// Byte-sum over the declared table length is nonzero.
    BadChecksum,
    /// Entry tag outside the five defined kinds.
    InvalidEntry(u8),
    /// An entry record would extend past the declared table end.
    TruncatedEntry,
}

impl fmt::Display for MpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MpError::NotFound => write!(f, "no MP floating pointer found"),
            MpError::NoConfigTable => write!(f, "MP config table not present"),
            MpError::BadSignature => write!(f, "MP config table signature mismatch"),
            MpError::BadVersion(v) => write!(f, "unsupported MP config version {v}"),
            MpError::BadLength(len) => write!(f, "implausible MP config length {len}"),
            MpError::BadChecksum => write!(f, "MP config table checksum mismatch"),
            MpError::InvalidEntry(tag) => write!(f, "invalid MP entry tag {tag}"),
            MpError::TruncatedEntry => write!(f, "MP entry truncated by table end"),
        }
    }
}
