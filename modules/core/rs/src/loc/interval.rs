use std::fmt::{Debug, Display};

use crate::num::PrimInt;
#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Dissolve;
use eyre::{eyre, Report, Result};
use impl_tools::autoimpl;

/// Zero-based half-open genomic interval [start, end). Empty and inverted intervals can't be
/// constructed, so every interval covers at least one position.
///
/// A feature spanning positions `left..=right` in closed coordinates is `[left, right + 1)`.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Dissolve)]
pub struct Interval<Idx: PrimInt> {
    start: Idx,
    end: Idx,
}

/// Read access to anything that occupies a half-open interval.
#[autoimpl(for <T: trait + ?Sized> &T, Box<T>)]
#[allow(clippy::len_without_is_empty)]
pub trait IntervalOp {
    type Idx: PrimInt;

    /// First covered position.
    fn start(&self) -> Self::Idx;

    /// Position right after the last covered one.
    fn end(&self) -> Self::Idx;

    /// Number of covered positions.
    fn len(&self) -> Self::Idx {
        self.end() - self.start()
    }
}

impl<T: PrimInt> IntervalOp for Interval<T> {
    type Idx = T;

    #[inline(always)]
    fn start(&self) -> Self::Idx {
        self.start
    }
    #[inline(always)]
    fn end(&self) -> Self::Idx {
        self.end
    }
}

impl<Idx: PrimInt> Interval<Idx> {
    pub fn new(start: Idx, end: Idx) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(eyre!("Invalid interval: start ({start:?}) >= end ({end:?})"))
        }
    }

    /// The `length` positions immediately preceding the interval: [start - length, start).
    /// Returns None if the flank is empty or would extend below zero.
    pub fn upstream(&self, length: Idx) -> Option<Self> {
        let start = self.start.checked_sub(&length)?;
        Self::new(start, self.start).ok()
    }

    /// The `length` positions immediately following the interval: [end, end + length).
    /// Returns None if the flank is empty or the end overflows.
    pub fn downstream(&self, length: Idx) -> Option<Self> {
        let end = self.end.checked_add(&length)?;
        Self::new(self.end, end).ok()
    }

    /// Sort the intervals by (start, end) and fuse every interval that starts no further than
    /// `distance` positions past the end of the running one. The result is sorted, and the gap
    /// between any two consecutive intervals is strictly greater than `distance`.
    ///
    /// A fused interval keeps the larger of the two ends instead of taking the end of the interval
    /// merged last, so a nested interval never shrinks the running one.
    pub fn merge_within(intervals: &mut [Self], distance: Idx) -> Vec<Self> {
        intervals.sort();

        let mut merged: Vec<Self> = Vec::with_capacity(intervals.len());
        for current in intervals.iter() {
            match merged.last_mut() {
                Some(last) if current.start <= last.end.saturating_add(distance) => {
                    last.end = last.end.max(current.end);
                }
                _ => merged.push(*current),
            }
        }
        merged
    }
}

impl<Idx: PrimInt> Default for Interval<Idx> {
    fn default() -> Self {
        Self {
            start: Idx::zero(),
            end: Idx::one(),
        }
    }
}

impl<Idx: PrimInt + Display> Display for Interval<Idx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<Idx: PrimInt> TryFrom<(Idx, Idx)> for Interval<Idx> {
    type Error = Report;

    fn try_from((start, end): (Idx, Idx)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intervals(raw: &[(u64, u64)]) -> Result<Vec<Interval<u64>>> {
        raw.iter().map(|x| Interval::try_from(*x)).collect()
    }

    #[test]
    fn test_construct() -> Result<()> {
        let interval = Interval::new(0u64, 10)?;
        assert_eq!((interval.start(), interval.end(), interval.len()), (0, 10, 10));
        assert_eq!(Interval::new(4u64, 5)?.len(), 1);
        assert_eq!(Interval::<u64>::default(), Interval::new(0, 1)?);

        for (start, end) in [(1u64, 0u64), (0, 0), (7, 7)] {
            assert!(Interval::new(start, end).is_err());
            assert!(Interval::try_from((start, end)).is_err());
        }
        Ok(())
    }

    #[test]
    fn test_flanks() -> Result<()> {
        let interval = Interval::new(5u64, 10)?;
        assert_eq!(interval.upstream(2), Some(Interval::new(3, 5)?));
        assert_eq!(interval.upstream(5), Some(Interval::new(0, 5)?));
        assert_eq!(interval.upstream(6), None);
        assert_eq!(interval.upstream(0), None);

        assert_eq!(interval.downstream(2), Some(Interval::new(10, 12)?));
        assert_eq!(interval.downstream(0), None);
        assert_eq!(Interval::new(0, u64::MAX)?.downstream(1), None);
        Ok(())
    }

    #[test]
    fn test_merge_within() -> Result<()> {
        for (distance, raw, expected) in [
            (4, vec![], vec![]),
            (4, vec![(0, 10)], vec![(0, 10)]),
            // 4 bases between the exons are fused away
            (4, vec![(14, 21), (0, 10)], vec![(0, 21)]),
            // 5 bases are retained
            (4, vec![(0, 10), (15, 21)], vec![(0, 10), (15, 21)]),
            // Nested and overlapping intervals never shrink the running one
            (4, vec![(0, 30), (5, 10), (28, 40)], vec![(0, 40)]),
            (0, vec![(0, 10), (10, 20), (21, 30)], vec![(0, 20), (21, 30)]),
            (
                4,
                vec![(100, 200), (0, 10), (12, 20), (50, 60)],
                vec![(0, 20), (50, 60), (100, 200)],
            ),
        ] {
            let mut raw = intervals(&raw)?;
            let expected = intervals(&expected)?;
            assert_eq!(Interval::merge_within(&mut raw, distance), expected);
        }
        Ok(())
    }

    #[test]
    fn test_display() -> Result<()> {
        assert_eq!(Interval::new(1, 10)?.to_string(), "[1, 10)");
        Ok(())
    }
}
