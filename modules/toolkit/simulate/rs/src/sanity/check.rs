use super::{Ratio, Report};
use crate::annotation::Annotation;
use crate::variants::{Kind, Variant};
use crate::Genome;
use ahash::AHashSet;
use eyre::{ensure, Result};
use itertools::Itertools;
use rnasim_core_rs::loc::{Interval, IntervalOp};
use rnasim_core_rs::seq::reverse_complement;

const DONOR: &[u8] = b"GT";
const ACCEPTOR: &[u8] = b"AG";

/// Bases covered by the flank, clamped to the sequence bounds.
fn site(seq: &[u8], flank: Option<Interval<u64>>) -> &[u8] {
    let Some(flank) = flank else {
        return &[];
    };
    let length = seq.len() as u64;
    let (start, end) = (flank.start().min(length), flank.end().min(length));
    &seq[start as usize..end as usize]
}

/// Count junctions with the canonical GT..AG consensus over all multi-exon transcripts.
///
/// Donor is the first two intron bases, acceptor is the last two. For transcripts on the reverse
/// strand both sites are reverse complemented and swapped, so the consensus is always checked in
/// the transcript reading direction. Sites clipped by the contig bounds are never canonical.
/// Comparison is case-sensitive.
pub fn splice_sites(genome: &Genome, annotation: &Annotation) -> Result<Ratio> {
    let mut ratio = Ratio::default();
    let mut missing = AHashSet::new();
    for (id, transcript) in annotation.transcripts().iter() {
        if transcript.exons().len() <= 1 {
            continue;
        }
        let Some(seq) = genome.get(transcript.contig()) else {
            missing.insert(transcript.contig().as_str());
            continue;
        };

        for (left, right) in transcript.exons().iter().tuple_windows() {
            ensure!(
                left.start() < right.start() && left.end() < right.end(),
                "Exons of transcript {id} are not strictly increasing: {left} then {right}"
            );

            let donor = site(seq, left.downstream(2));
            let acceptor = site(seq, right.upstream(2));
            let canonical = if transcript.orientation().is_reverse() {
                reverse_complement(acceptor) == DONOR && reverse_complement(donor) == ACCEPTOR
            } else {
                donor == DONOR && acceptor == ACCEPTOR
            };
            ratio.add(canonical);
        }
    }

    if !missing.is_empty() {
        log::warn!(
            "Skipped splice sites of transcripts on {} contig(s) absent from the genome: {:?}",
            missing.len(),
            missing.iter().sorted().collect_vec()
        );
    }
    Ok(ratio)
}

/// Count single base variants whose payload differs from the reference base.
/// Variants on contigs absent from the genome are ignored, positions past the contig end are fatal.
pub fn alternative_bases(genome: &Genome, variants: &[Variant]) -> Result<Ratio> {
    let mut ratio = Ratio::default();
    for variant in variants {
        let Kind::Single(base) = variant.kind() else {
            continue;
        };
        let Some(seq) = genome.get(variant.contig()) else {
            continue;
        };

        let position = *variant.position();
        ensure!(
            position < seq.len() as u64,
            "Variant {} is outside of the contig: {}:{} (length {})",
            variant.id(),
            variant.contig(),
            position,
            seq.len()
        );
        let position = position as usize;
        ratio.add(&seq[position..position + 1] != base.as_bytes());
    }
    Ok(ratio)
}

/// Run all consistency checks. Fails if there are no splice junctions or no single base variants
/// to check, since both fractions would be undefined.
pub fn check(genome: &Genome, annotation: &Annotation, variants: &[Variant]) -> Result<Report> {
    let report = Report::new(
        splice_sites(genome, annotation)?,
        alternative_bases(genome, variants)?,
    );
    ensure!(
        !report.splice_sites().is_empty(),
        "No splice junctions to check, no multi-exon transcripts lie on known contigs"
    );
    ensure!(
        !report.alternative_bases().is_empty(),
        "No single base variants to check on known contigs"
    );
    Ok(report)
}
