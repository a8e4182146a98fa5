use super::record::{Kind, Record};
use crate::compression;
use crate::traits::{Parsed, ReadRecord};
use ahash::AHashMap;
use eyre::{Result, WrapErr};
use std::io::BufRead;
use std::path::Path;

/// Reasons for ignoring an SNP table line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Skip {
    /// Empty or whitespace-only line
    Blank,
    /// Line starting with '#'
    Comment,
    /// Line that doesn't split into exactly 5 tab-separated fields
    FieldCount,
}

pub mod parse {
    use super::*;
    use eyre::bail;

    pub fn kind(kind: &str, data: &str) -> Result<Kind> {
        let kind = match kind {
            "single" => Kind::Single(data.to_owned()),
            "deletion" => {
                let length = data
                    .parse::<u64>()
                    .wrap_err_with(|| format!("Invalid deletion length: {data}"))?;
                Kind::Deletion(length)
            }
            "insertion" => Kind::Insertion(data.to_owned()),
            _ => bail!(
                "Unsupported variant type '{kind}', expected one of {:?}",
                Kind::NAMES
            ),
        };
        Ok(kind)
    }

    pub fn line(line: &str) -> Result<Parsed<Record, Skip>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Parsed::Skipped(Skip::Blank));
        }
        if line.starts_with('#') {
            return Ok(Parsed::Skipped(Skip::Comment));
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let &[id, kind, contig, position, data] = fields.as_slice() else {
            return Ok(Parsed::Skipped(Skip::FieldCount));
        };

        let kind = self::kind(kind, data)?;
        let position = position
            .parse::<u64>()
            .wrap_err_with(|| format!("Invalid variant position: {position}"))?;

        Ok(Parsed::Record(Record::new(
            id.to_owned(),
            kind,
            contig.to_owned(),
            position,
        )))
    }
}

/// Streaming SNP table reader. Blank, commented out, and truncated lines are skipped and counted
/// per reason (see [Reader::skipped]).
pub struct Reader<R> {
    reader: R,
    buffer: Vec<u8>,
    lines: usize,
    skipped: AHashMap<Skip, usize>,
}

impl Reader<()> {
    /// Create a new SNP table reader from the given file path.
    /// Gzip compression is detected automatically based on the file signature.
    pub fn from_path(
        path: impl AsRef<Path>,
    ) -> Result<Reader<Box<dyn BufRead + Send + Sync + 'static>>> {
        let path = path.as_ref();
        let stream = compression::open(path)
            .wrap_err_with(|| format!("Failed to open SNP file {}", path.display()))?;
        Ok(Reader::new(stream.boxed()))
    }
}

impl<R> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            lines: 0,
            skipped: AHashMap::new(),
        }
    }

    /// Number of skipped lines per reason.
    pub fn skipped(&self) -> &AHashMap<Skip, usize> {
        &self.skipped
    }

    /// Number of lines consumed so far.
    pub fn lines(&self) -> usize {
        self.lines
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Record;

    fn read_record(&mut self, into: &mut Self::Record) -> Result<bool> {
        loop {
            self.buffer.clear();
            if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
                return Ok(false);
            }
            self.lines += 1;

            // Free text fields may carry any encoding, invalid UTF-8 is replaced with U+FFFD
            let line = String::from_utf8_lossy(&self.buffer);
            let parsed = parse::line(&line).wrap_err_with(|| {
                format!("Failed to parse SNP line {}: {}", self.lines, line.trim_end())
            })?;
            match parsed {
                Parsed::Record(record) => {
                    *into = record;
                    return Ok(true);
                }
                Parsed::Skipped(reason) => {
                    log::debug!("Skipping SNP line {} ({reason:?})", self.lines);
                    *self.skipped.entry(reason).or_default() += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn variant(id: &str, kind: Kind, contig: &str, position: u64) -> Record {
        Record::new(id.to_string(), kind, contig.to_string(), position)
    }

    #[test]
    fn test_parse_line() -> Result<()> {
        for (line, expected) in [
            (
                "rs1\tsingle\tchr1\t10\tA",
                Parsed::Record(variant("rs1", Kind::Single("A".into()), "chr1", 10)),
            ),
            (
                "rs2\tdeletion\tchr2\t0\t15\n",
                Parsed::Record(variant("rs2", Kind::Deletion(15), "chr2", 0)),
            ),
            (
                "rs3\tinsertion\tchrX\t7\tACGT\r\n",
                Parsed::Record(variant("rs3", Kind::Insertion("ACGT".into()), "chrX", 7)),
            ),
            ("", Parsed::Skipped(Skip::Blank)),
            ("   ", Parsed::Skipped(Skip::Blank)),
            ("#rs1\tsingle\tchr1\t10\tA", Parsed::Skipped(Skip::Comment)),
            ("rs1\tsingle\tchr1\t10", Parsed::Skipped(Skip::FieldCount)),
            ("rs1\tsingle\tchr1\t10\tA\tB", Parsed::Skipped(Skip::FieldCount)),
        ] {
            assert_eq!(parse::line(line)?, expected, "Line: {line:?}");
        }
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        for line in [
            // Unsupported variant types are fatal
            "rs1\tindel\tchr1\t10\tA",
            "rs1\tSingle\tchr1\t10\tA",
            // So are malformed integers
            "rs1\tsingle\tchr1\tten\tA",
            "rs1\tsingle\tchr1\t-1\tA",
            "rs1\tdeletion\tchr1\t10\tA",
        ] {
            assert!(parse::line(line).is_err(), "Line: {line:?}");
        }
    }

    #[test]
    fn test_reader_fails_on_invalid_type() {
        let content = "rs0\tsingle\tchr1\t1\tC\nrs1\tindel\tchr1\t10\tA\n";
        let mut records = Vec::new();
        let result = Reader::new(Cursor::new(content)).read_to_end(&mut records);
        assert!(result.is_err());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_example_snp() -> Result<()> {
        let expected = vec![
            variant("rs1", Kind::Single("A".into()), "chr1", 3),
            variant("rs2", Kind::Deletion(4), "chr1", 10),
            variant("rs3", Kind::Insertion("TTA".into()), "chrM", 2),
        ];

        for fname in ["example.snp", "example.snp.gz"] {
            let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("resources")
                .join(fname);

            let mut records = Vec::new();
            let mut reader = Reader::from_path(&path)?;
            reader.read_to_end(&mut records)?;
            assert_eq!(records, expected);

            assert_eq!(reader.lines(), 6);
            assert_eq!(reader.skipped().get(&Skip::Comment), Some(&1));
            assert_eq!(reader.skipped().get(&Skip::Blank), Some(&1));
            assert_eq!(reader.skipped().get(&Skip::FieldCount), Some(&1));
        }
        Ok(())
    }
}
