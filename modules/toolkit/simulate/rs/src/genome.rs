use derive_getters::Dissolve;
use eyre::Result;
use rnasim_collections_rs::ordered_map::OrderedMap;
use rnasim_io_rs::{fasta, ReadRecord};

/// Reference sequences indexed by contig name. Built once and read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq, Default, Dissolve)]
pub struct Genome {
    contigs: OrderedMap<String, Vec<u8>>,
}

impl Genome {
    /// Load all records from a FASTA reader. If a contig name is repeated, the last sequence wins.
    pub fn load<R>(reader: &mut R) -> Result<Self>
    where
        R: ReadRecord<Record = fasta::Record> + ?Sized,
    {
        let mut contigs = OrderedMap::new();
        let mut record = fasta::Record::default();
        while reader.read_record(&mut record)? {
            let (id, seq) = std::mem::take(&mut record).dissolve();
            if contigs.contains_key(&id) {
                log::warn!("Duplicated FASTA record, the previous sequence is replaced: {id}");
            }
            contigs.insert(id, seq);
        }

        log::info!(
            "Loaded {} contig(s), {} bases in total",
            contigs.len(),
            contigs.values().map(|x| x.len()).sum::<usize>()
        );
        Ok(Self { contigs })
    }

    /// Sequence of the contig, if present.
    pub fn get(&self, contig: &str) -> Option<&[u8]> {
        self.contigs.get(contig).map(|x| x.as_slice())
    }

    pub fn contains(&self, contig: &str) -> bool {
        self.contigs.contains_key(contig)
    }

    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }

    /// Contigs in the order they were first seen.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &[u8])> {
        self.contigs
            .iter()
            .map(|(name, seq)| (name.as_str(), seq.as_slice()))
    }
}

impl FromIterator<(String, Vec<u8>)> for Genome {
    fn from_iter<T: IntoIterator<Item = (String, Vec<u8>)>>(iter: T) -> Self {
        Self {
            contigs: iter.into_iter().collect(),
        }
    }
}
