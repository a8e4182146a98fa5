use super::{AnnotationBuilder, Stats, Transcript};
use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::Result;
use rnasim_collections_rs::ordered_map::OrderedMap;
use rnasim_io_rs::{gtf, ReadRecord};

/// Genes and transcripts with merged exon structures. Both maps keep the order in which their
/// keys first appeared in the GTF input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Dissolve, Getters, Constructor)]
pub struct Annotation {
    /// gene_id -> transcript_id(s)
    genes: OrderedMap<String, Vec<String>>,
    /// transcript_id -> transcript model
    transcripts: OrderedMap<String, Transcript>,
}

impl Annotation {
    pub fn builder() -> AnnotationBuilder {
        AnnotationBuilder::default()
    }

    /// Build the annotation from all GTF records using the default merge threshold.
    pub fn load<R>(reader: &mut R) -> Result<Self>
    where
        R: ReadRecord<Record = gtf::Record> + ?Sized,
    {
        let mut builder = Self::builder();
        builder.add_records(reader)?;
        Ok(builder.build())
    }

    /// Transcript model by its identifier.
    pub fn transcript(&self, id: &str) -> Option<&Transcript> {
        self.transcripts.get(id)
    }

    pub fn stats(&self) -> Stats {
        Stats::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rnasim_core_rs::loc::{Interval, Orientation};
    use std::io::Cursor;

    #[test]
    fn test_load() -> Result<()> {
        let content = "\
chr1\ttest\tgene\t1\t100\t.\t+\t.\tgene_id \"G1\";
chr1\ttest\texon\t50\t60\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";
chr1\ttest\texon\t1\t10\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";
chr2\ttest\texon\t5\t9\t.\t-\t.\tgene_id \"G2\"; transcript_id \"T2\"
";
        let annotation = Annotation::load(&mut gtf::Reader::new(Cursor::new(content)))?;

        assert_eq!(annotation.genes().len(), 2);
        assert_eq!(annotation.genes().get("G1"), Some(&vec!["T1".to_string()]));
        assert_eq!(annotation.genes().get("G2"), Some(&vec!["T2".to_string()]));

        assert_eq!(
            annotation.transcript("T1"),
            Some(&Transcript::new(
                "chr1".to_string(),
                Orientation::Forward,
                vec![Interval::new(0, 10)?, Interval::new(49, 60)?]
            ))
        );
        assert_eq!(
            annotation.transcript("T2"),
            Some(&Transcript::new(
                "chr2".to_string(),
                Orientation::Reverse,
                vec![Interval::new(4, 9)?]
            ))
        );
        assert_eq!(annotation.transcript("T3"), None);
        Ok(())
    }
}
