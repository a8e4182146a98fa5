use super::{Annotation, Transcript};
use ahash::AHashMap;
use eyre::Result;
use rnasim_collections_rs::ordered_map::OrderedMap;
use rnasim_core_rs::loc::{Interval, IntervalOp, Orientation};
use rnasim_io_rs::{gtf, Parsed, ReadRecord};

/// Reasons for ignoring a parsed GTF record while building the annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Skip {
    /// Feature other than "exon"
    Feature,
    /// Exon spanning a single base (start >= end in zero-based closed coordinates)
    SingleBase,
    /// No gene_id attribute
    MissingGeneId,
    /// No transcript_id attribute
    MissingTranscriptId,
}

/// Exon row accepted by the builder. Borrowed from the GTF record.
struct Exon<'a> {
    gene: &'a str,
    transcript: &'a str,
    contig: &'a str,
    orientation: Orientation,
    interval: Interval<u64>,
}

impl<'a> Exon<'a> {
    fn classify(record: &'a gtf::Record) -> Parsed<Self, Skip> {
        if record.feature() != "exon" {
            return Parsed::Skipped(Skip::Feature);
        }
        if record.interval().len() < 2 {
            return Parsed::Skipped(Skip::SingleBase);
        }
        let Some(gene) = record.attribute("gene_id") else {
            return Parsed::Skipped(Skip::MissingGeneId);
        };
        let Some(transcript) = record.attribute("transcript_id") else {
            return Parsed::Skipped(Skip::MissingTranscriptId);
        };

        Parsed::Record(Exon {
            gene,
            transcript,
            contig: record.seqid(),
            orientation: *record.orientation(),
            interval: *record.interval(),
        })
    }
}

/// Accumulates exon rows into genes and transcripts. Exons are collected as-is and sorted/merged
/// once per transcript in [AnnotationBuilder::build].
pub struct AnnotationBuilder {
    max_merged_intron: u64,
    genes: OrderedMap<String, Vec<String>>,
    transcripts: OrderedMap<String, Transcript>,
    skipped: AHashMap<Skip, usize>,
}

impl Default for AnnotationBuilder {
    fn default() -> Self {
        Self {
            max_merged_intron: Self::MAX_MERGED_INTRON,
            genes: OrderedMap::new(),
            transcripts: OrderedMap::new(),
            skipped: AHashMap::new(),
        }
    }
}

impl AnnotationBuilder {
    /// Introns of up to 4 bases (5 or less between the last base of an exon and the first base
    /// of the next one) are treated as annotation noise and fused into the flanking exons.
    pub const MAX_MERGED_INTRON: u64 = 4;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_merged_intron(mut self, bases: u64) -> Self {
        self.max_merged_intron = bases;
        self
    }

    /// Number of skipped records per reason.
    pub fn skipped(&self) -> &AHashMap<Skip, usize> {
        &self.skipped
    }

    /// Add a single GTF record. Returns the reason if the record was ignored.
    ///
    /// The first exon of a transcript defines its contig and orientation; later exons only
    /// contribute their intervals.
    pub fn add_record(&mut self, record: &gtf::Record) -> Option<Skip> {
        let exon = match Exon::classify(record) {
            Parsed::Record(exon) => exon,
            Parsed::Skipped(reason) => {
                *self.skipped.entry(reason).or_default() += 1;
                return Some(reason);
            }
        };

        match self.transcripts.get_mut(exon.transcript) {
            Some(transcript) => {
                if transcript.contig() != exon.contig
                    || *transcript.orientation() != exon.orientation
                {
                    log::warn!(
                        "Exon {}:{}{} of transcript {} disagrees with its location {}:{}",
                        exon.contig,
                        exon.interval,
                        exon.orientation,
                        exon.transcript,
                        transcript.contig(),
                        transcript.orientation()
                    );
                }
                transcript.push_exon(exon.interval);
            }
            None => {
                self.transcripts.insert(
                    exon.transcript.to_owned(),
                    Transcript::new(
                        exon.contig.to_owned(),
                        exon.orientation,
                        vec![exon.interval],
                    ),
                );
                self.genes
                    .get_or_insert_with(exon.gene.to_owned(), Vec::new)
                    .push(exon.transcript.to_owned());
            }
        }
        None
    }

    /// Add all remaining records from the GTF reader. Returns the number of accepted exons.
    pub fn add_records<R>(&mut self, reader: &mut R) -> Result<usize>
    where
        R: ReadRecord<Record = gtf::Record> + ?Sized,
    {
        let mut accepted = 0;
        let mut record = gtf::Record::default();
        while reader.read_record(&mut record)? {
            if self.add_record(&record).is_none() {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Sort and merge the exons of every transcript.
    pub fn build(self) -> Annotation {
        let transcripts = self
            .transcripts
            .into_iter()
            .map(|(id, transcript)| {
                let (contig, orientation, mut exons) = transcript.dissolve();
                let exons = Interval::merge_within(&mut exons, self.max_merged_intron);
                (id, Transcript::new(contig, orientation, exons))
            })
            .collect();

        if !self.skipped.is_empty() {
            log::info!("Skipped GTF records: {:?}", self.skipped);
        }
        Annotation::new(self.genes, transcripts)
    }
}
