use super::Annotation;
use derive_getters::Getters;
use rnasim_core_rs::loc::IntervalOp;
use std::fmt::{Display, Formatter};

/// Summary of the annotation structure, logged by the pipeline in verbose mode.
#[derive(Debug, Clone, Copy, PartialEq, Default, Getters)]
pub struct Stats {
    genes: usize,
    transcripts: usize,
    exons: usize,
    introns: usize,
    mean_exon_length: Option<f64>,
    mean_intron_length: Option<f64>,
    mean_transcript_length: Option<f64>,
}

fn mean(total: u64, count: usize) -> Option<f64> {
    (count > 0).then(|| total as f64 / count as f64)
}

impl Stats {
    pub fn new(annotation: &Annotation) -> Self {
        let (mut exons, mut exons_length) = (0, 0);
        let (mut introns, mut introns_length) = (0, 0);
        let mut transcripts_length = 0;
        for transcript in annotation.transcripts().values() {
            exons += transcript.exons().len();
            exons_length += transcript.length();
            transcripts_length += transcript.length();
            for intron in transcript.introns() {
                introns += 1;
                introns_length += intron.len();
            }
        }

        let transcripts = annotation.transcripts().len();
        Self {
            genes: annotation.genes().len(),
            transcripts,
            exons,
            introns,
            mean_exon_length: mean(exons_length, exons),
            mean_intron_length: mean(introns_length, introns),
            mean_transcript_length: mean(transcripts_length, transcripts),
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fmt = |x: Option<f64>| x.map_or("n/a".to_string(), |x| format!("{x:.1}"));
        write!(
            f,
            "{} gene(s), {} transcript(s) (mean length {}), {} exon(s) (mean length {}), \
             {} intron(s) (mean length {})",
            self.genes,
            self.transcripts,
            fmt(self.mean_transcript_length),
            self.exons,
            fmt(self.mean_exon_length),
            self.introns,
            fmt(self.mean_intron_length)
        )
    }
}
