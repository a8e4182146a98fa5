use std::fmt::Display;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use eyre::{eyre, Report, Result};

/// Strand of a genomic feature relative to the reference coordinate axis.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Orientation {
    /// '+', read along increasing coordinates
    Forward,
    /// '-', read along decreasing coordinates on the complementary strand
    Reverse,
    /// '.', strand is unknown or irrelevant
    #[default]
    Dual,
}

impl Orientation {
    /// Symbol used for the orientation in GTF/BED-like files.
    pub fn symbol(&self) -> char {
        match self {
            Orientation::Forward => '+',
            Orientation::Reverse => '-',
            Orientation::Dual => '.',
        }
    }

    /// Whether sequences of features with this orientation must be reverse complemented to be read
    /// in their 5'->3' direction.
    pub fn is_reverse(&self) -> bool {
        matches!(self, Orientation::Reverse)
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Orientation {
    type Error = Report;

    fn try_from(value: char) -> Result<Self> {
        match value {
            '+' => Ok(Orientation::Forward),
            '-' => Ok(Orientation::Reverse),
            '.' => Ok(Orientation::Dual),
            _ => Err(eyre!("Unknown strand symbol: {value:?}")),
        }
    }
}

impl TryFrom<&str> for Orientation {
    type Error = Report;

    fn try_from(value: &str) -> Result<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Orientation::try_from(symbol),
            _ => Err(eyre!("Strand must be a single symbol, got {value:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() -> Result<()> {
        for (orientation, symbol) in [
            (Orientation::Forward, '+'),
            (Orientation::Reverse, '-'),
            (Orientation::Dual, '.'),
        ] {
            assert_eq!(orientation.symbol(), symbol);
            assert_eq!(orientation.to_string(), symbol.to_string());
            assert_eq!(Orientation::try_from(symbol)?, orientation);
            assert_eq!(Orientation::try_from(symbol.to_string().as_str())?, orientation);
        }
        assert_eq!(Orientation::default(), Orientation::Dual);
        Ok(())
    }

    #[test]
    fn test_invalid_symbols() {
        for symbol in ["", "x", "+-", "++", " +", "?"] {
            assert!(Orientation::try_from(symbol).is_err(), "Symbol: {symbol:?}");
        }
    }

    #[test]
    fn test_is_reverse() {
        assert!(Orientation::Reverse.is_reverse());
        assert!(!Orientation::Forward.is_reverse());
        assert!(!Orientation::Dual.is_reverse());
    }
}
