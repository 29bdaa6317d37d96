//! Known deviations between the published schema and the daemon's behavior.
//!
//! Each entry names an enum and the values to prepend to it, in order.
//! Patches are applied regardless of the values the schema already lists.

use crate::ir::EnumValueMember;

/// A synthetic value prepended to an enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumPatch {
    pub enum_name: &'static str,
    pub value_name: &'static str,
    pub literal: &'static str,
    pub doc: &'static str,
}

impl EnumPatch {
    pub fn to_member(&self) -> EnumValueMember {
        EnumValueMember {
            name: self.value_name.to_string(),
            value: self.literal.to_string(),
            doc: self.doc.to_string(),
        }
    }
}

/// The daemon reports an empty build state for builds the caller cannot see.
pub const ENUM_PATCHES: &[EnumPatch] = &[EnumPatch {
    enum_name: "BuildState",
    value_name: "Unknown",
    literal: "\"\"",
    doc: "Unknown build state, presumably because you don't have permissions to see it",
}];

/// Values to prepend to `enum_name`, in insertion order
pub fn enum_patches(enum_name: &str) -> impl Iterator<Item = &'static EnumPatch> + '_ {
    ENUM_PATCHES
        .iter()
        .filter(move |patch| patch.enum_name == enum_name)
}
