use super::Ratio;
use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use std::fmt::{Display, Formatter};

/// Outcome of the input consistency checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Dissolve, Constructor)]
pub struct Report {
    /// Junctions with the canonical GT..AG consensus out of all checked junctions
    splice_sites: Ratio,
    /// Single base variants that differ from the reference out of all checked variants
    alternative_bases: Ratio,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "GT/AG splice sites: {}", self.splice_sites)?;
        write!(f, "Alternative bases: {}", self.alternative_bases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let report = Report::new(Ratio::new(99, 100), Ratio::new(1, 3));
        assert_eq!(
            report.to_string(),
            "GT/AG splice sites: 99/100 (99.00%)\nAlternative bases: 1/3 (33.33%)"
        );
    }
}
