#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};
use std::error::Error;

/// A single FASTA record with the following guarantees:
/// - The ID is non-empty and can't contain any newline characters (CR or LF).
/// - The sequence is non-empty.
///
/// No other validation is performed: the sequence is stored byte-for-byte as it appears in the
/// input, including lowercase (soft-masked) and IUPAC ambiguity symbols.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Dissolve, Getters)]
pub struct Record {
    id: String,
    seq: Vec<u8>,
}

impl<ID, SEQ> TryFrom<(ID, SEQ)> for Record
where
    ID: TryInto<String, Error: Error + Send + Sync + 'static>,
    SEQ: TryInto<Vec<u8>, Error: Error + Send + Sync + 'static>,
{
    type Error = eyre::Report;

    fn try_from(value: (ID, SEQ)) -> Result<Self> {
        Self::new(value.0.try_into()?, value.1.try_into()?)
    }
}

impl Record {
    /// Creates a new FASTA record with the given ID and sequence.
    pub fn new(id: String, seq: Vec<u8>) -> Result<Self> {
        Self::validate(&id, &seq)?;
        Ok(Self { id, seq })
    }

    pub fn validate(id: &str, seq: &[u8]) -> Result<()> {
        ensure!(!id.is_empty(), "FASTA ID cannot be empty");
        ensure!(
            !id.contains(&['\n', '\r'] as &[char]),
            "Newline characters are not allowed in the FASTA ID: {id}"
        );
        ensure!(!seq.is_empty(), "FASTA sequence cannot be empty: {id}");
        Ok(())
    }

    /// The reader is responsible for leaving the fields valid after a successful read.
    pub(super) fn raw(&mut self) -> (&mut String, &mut Vec<u8>) {
        (&mut self.id, &mut self.seq)
    }
}
