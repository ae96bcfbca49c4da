//! Typed set/query operations over frontend attributes.
//!
//! These functions are stateless: they borrow an instruction for the duration
//! of the call and never keep anything around. Flags are stored as
//! `name="true"` in a freshly appended map; queries only test for the presence
//! of the key, so repeated marking is harmless.
use crate::{
    attributes::{FrontendAttributed, FrontendAttributes},
    constants::DISJOINT_READ_WRITE_REGIONS,
};

/// Append a presence-only flag map `{name="true"}` to `instr`.
pub fn mark_flag<I: FrontendAttributed + ?Sized>(instr: &mut I, name: &str) {
    instr.add_frontend_attributes(FrontendAttributes::flag(name));
}

/// Returns true if any map attached to `instr` contains `name`.
pub fn has_flag<I: FrontendAttributed + ?Sized>(instr: &I, name: &str) -> bool {
    instr.has_frontend_attribute(name)
}

/// Tag `instr` as having mutually disjoint read and write memory regions.
pub fn mark_disjoint_read_write_regions<I: FrontendAttributed + ?Sized>(instr: &mut I) {
    mark_flag(instr, DISJOINT_READ_WRITE_REGIONS);
}

/// Returns true if `instr` was tagged with [`mark_disjoint_read_write_regions`].
pub fn has_disjoint_read_write_regions<I: FrontendAttributed + ?Sized>(instr: &I) -> bool {
    has_flag(instr, DISJOINT_READ_WRITE_REGIONS)
}
