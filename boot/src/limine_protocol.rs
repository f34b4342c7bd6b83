//! Limine boot protocol requests.
//!
//! The request statics live in the dedicated `.requests` section the
//! bootloader scans; the markers bracket it. Everything else in the
//! kernel asks this module rather than touching the statics directly.

use limine::BaseRevision;
use limine::request::{HhdmRequest, RequestsEndMarker, RequestsStartMarker};

#[used]
#[unsafe(link_section = ".requests_start_marker")]
static REQUESTS_START_MARKER: RequestsStartMarker = RequestsStartMarker::new();

#[used]
#[unsafe(link_section = ".requests")]
static BASE_REVISION: BaseRevision = BaseRevision::new();

#[used]
#[unsafe(link_section = ".requests")]
static HHDM_REQUEST: HhdmRequest = HhdmRequest::new();

#[used]
#[unsafe(link_section = ".requests_end_marker")]
static REQUESTS_END_MARKER: RequestsEndMarker = RequestsEndMarker::new();

/// True when the bootloader speaks the protocol revision we were built
/// against.
pub fn base_revision_supported() -> bool {
    BASE_REVISION.is_supported()
}

/// Offset of the higher-half direct map, if the bootloader provided one.
pub fn hhdm_offset() -> Option<u64> {
    HHDM_REQUEST.get_response().map(|response| response.offset())
}
