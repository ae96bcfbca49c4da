//! Well-known frontend attribute names.
//!
//! Every pass that reads or writes a frontend attribute must go through the
//! constants defined here rather than spelling the key out by hand, so that a
//! typo cannot silently turn a hint into an unrelated attribute.
use strum::{EnumIter, IntoEnumIterator};

/// Marks an instruction whose read and write memory regions never overlap.
///
/// Only the presence of the key is meaningful; the setter always stores
/// [`FLAG_VALUE`].
pub const DISJOINT_READ_WRITE_REGIONS: &str = "disjoint_read_write_regions";

/// Value stored for presence-only (flag) attributes.
pub const FLAG_VALUE: &str = "true";

/// Registry of the frontend attribute names this crate assigns a meaning to.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum WellKnownAttribute {
    /// See [`DISJOINT_READ_WRITE_REGIONS`].
    DisjointReadWriteRegions,
}

impl WellKnownAttribute {
    /// Returns the attribute key used in frontend attribute maps.
    pub fn name(&self) -> &'static str {
        match self {
            WellKnownAttribute::DisjointReadWriteRegions => DISJOINT_READ_WRITE_REGIONS,
        }
    }

    /// Looks up the registered attribute for `name`, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        WellKnownAttribute::iter().find(|attr| attr.name() == name)
    }

    /// Returns true if every instance of this attribute is a presence-only flag.
    pub fn is_flag(&self) -> bool {
        match self {
            WellKnownAttribute::DisjointReadWriteRegions => true,
        }
    }
}

/// Returns true if `name` is one of the registered attribute names.
pub fn is_well_known(name: &str) -> bool {
    WellKnownAttribute::from_name(name).is_some()
}
