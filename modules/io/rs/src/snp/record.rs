#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use std::fmt::Display;

/// Variant type together with its payload.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Single base substitution, holds the alternative base(s)
    Single(String),
    /// Deletion, holds the number of deleted bases
    Deletion(u64),
    /// Insertion, holds the inserted bases
    Insertion(String),
}

impl Kind {
    pub const NAMES: [&'static str; 3] = ["single", "deletion", "insertion"];

    /// Name of the variant type as it appears in SNP tables.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Single(_) => "single",
            Kind::Deletion(_) => "deletion",
            Kind::Insertion(_) => "insertion",
        }
    }
}

impl Default for Kind {
    fn default() -> Self {
        Kind::Single(String::new())
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Single(base) => write!(f, "single:{base}"),
            Kind::Deletion(length) => write!(f, "deletion:{length}"),
            Kind::Insertion(bases) => write!(f, "insertion:{bases}"),
        }
    }
}

/// A single variant from an SNP table. Records are created once and never modified.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Dissolve, Getters, Constructor,
)]
pub struct Record {
    id: String,
    kind: Kind,
    contig: String,
    position: u64,
}
