use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use itertools::Itertools;
use rnasim_core_rs::loc::{Interval, IntervalOp, Orientation};

/// Transcript model: contig, orientation, and exons as zero-based half-open intervals.
///
/// Exons of a built transcript are sorted, non-overlapping, and separated by introns longer than
/// the merge threshold of the [AnnotationBuilder](super::AnnotationBuilder) that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Dissolve, Getters, Constructor)]
pub struct Transcript {
    contig: String,
    orientation: Orientation,
    exons: Vec<Interval<u64>>,
}

impl Transcript {
    /// Total length of all exons.
    pub fn length(&self) -> u64 {
        self.exons.iter().map(|x| x.len()).sum()
    }

    pub(super) fn push_exon(&mut self, exon: Interval<u64>) {
        self.exons.push(exon);
    }

    /// Introns as gaps between consecutive exons.
    pub fn introns(&self) -> impl Iterator<Item = Interval<u64>> + '_ {
        self.exons
            .iter()
            .tuple_windows()
            .filter_map(|(left, right)| Interval::new(left.end(), right.start()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::Result;

    #[test]
    fn test_length_and_introns() -> Result<()> {
        let transcript = Transcript::new(
            "chr1".to_string(),
            Orientation::Reverse,
            vec![
                Interval::new(0, 10)?,
                Interval::new(20, 25)?,
                Interval::new(100, 200)?,
            ],
        );
        assert_eq!(transcript.length(), 115);
        assert_eq!(
            transcript.introns().collect::<Vec<_>>(),
            [Interval::new(10, 20)?, Interval::new(25, 100)?]
        );

        let single = Transcript::new(
            "chr1".to_string(),
            Orientation::Forward,
            vec![Interval::new(5, 6)?],
        );
        assert_eq!(single.length(), 1);
        assert_eq!(single.introns().count(), 0);
        Ok(())
    }
}
