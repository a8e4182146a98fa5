use super::record::Record;
use crate::compression;
use crate::traits::{Parsed, ReadRecord};
use ahash::AHashMap;
use eyre::{Result, WrapErr};
use std::io::BufRead;
use std::path::Path;

/// Reasons for ignoring a GTF line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Skip {
    /// Empty or whitespace-only line
    Blank,
    /// Line starting with '#'
    Comment,
    /// Line that doesn't split into exactly 9 tab-separated fields
    FieldCount,
    /// End coordinate before the start coordinate
    Inverted,
}

pub mod parse {
    use super::*;
    use eyre::ensure;
    use rnasim_core_rs::loc::{Interval, Orientation};

    /// Parse `key value; key "value"; ...` pairs. Quotes around values are removed, empty entries
    /// (e.g. after the trailing ';') are ignored.
    pub fn attributes(field: &str) -> Vec<(String, String)> {
        field
            .split(';')
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .map(|attr| {
                let (key, value) = attr.split_once(' ').unwrap_or((attr, ""));
                (key.to_owned(), value.trim().trim_matches('"').to_owned())
            })
            .collect()
    }

    /// Convert 1-based inclusive coordinates into a zero-based half-open interval.
    /// Returns None if the end precedes the start.
    pub fn interval(start: &str, end: &str) -> Result<Option<Interval<u64>>> {
        let start = start
            .trim()
            .parse::<u64>()
            .wrap_err_with(|| format!("Invalid GTF start: {start}"))?;
        let end = end
            .trim()
            .parse::<u64>()
            .wrap_err_with(|| format!("Invalid GTF end: {end}"))?;
        ensure!(start > 0, "GTF coordinates are 1-based, got start = 0");

        if end < start {
            return Ok(None);
        }
        Interval::new(start - 1, end).map(Some)
    }

    /// Parse a single GTF line. Inline comments are stripped before splitting the line into fields.
    /// Only malformed coordinates are reported as errors, everything else is either a record or
    /// a skip. A zero start is malformed, it has no zero-based counterpart.
    pub fn line(line: &str) -> Result<Parsed<Record, Skip>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Parsed::Skipped(Skip::Blank));
        }
        if line.starts_with('#') {
            return Ok(Parsed::Skipped(Skip::Comment));
        }
        let line = match line.split_once('#') {
            Some((content, _)) => content.trim(),
            None => line,
        };

        let fields: Vec<&str> = line.split('\t').collect();
        let &[seqid, source, feature, start, end, score, strand, frame, attributes] =
            fields.as_slice()
        else {
            return Ok(Parsed::Skipped(Skip::FieldCount));
        };

        let interval = interval(start, end)?;
        let attributes = self::attributes(attributes);

        let interval = match interval {
            Some(interval) => interval,
            None => return Ok(Parsed::Skipped(Skip::Inverted)),
        };
        // Anything but '+' or '-' means the strand is unknown
        let orientation = Orientation::try_from(strand).unwrap_or_else(|_| {
            log::debug!("Unknown GTF strand {strand:?} is read as '.'");
            Orientation::Dual
        });

        Ok(Parsed::Record(Record::new(
            seqid.to_owned(),
            source.to_owned(),
            feature.to_owned(),
            interval,
            score.to_owned(),
            orientation,
            frame.to_owned(),
            attributes,
        )))
    }
}

/// Streaming GTF reader. Lines that are blank, commented out, or malformed in a tolerated way are
/// skipped and counted per reason (see [Reader::skipped]).
pub struct Reader<R> {
    reader: R,
    buffer: Vec<u8>,
    lines: usize,
    skipped: AHashMap<Skip, usize>,
}

impl Reader<()> {
    /// Create a new GTF reader from the given file path.
    /// Gzip compression is detected automatically based on the file signature.
    pub fn from_path(
        path: impl AsRef<Path>,
    ) -> Result<Reader<Box<dyn BufRead + Send + Sync + 'static>>> {
        let path = path.as_ref();
        let stream = compression::open(path)
            .wrap_err_with(|| format!("Failed to open GTF file {}", path.display()))?;
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
                format!("Failed to parse GTF line {}: {}", self.lines, line.trim_end())
            })?;
            match parsed {
                Parsed::Record(record) => {
                    *into = record;
                    return Ok(true);
                }
                Parsed::Skipped(reason) => {
                    log::debug!("Skipping GTF line {} ({reason:?})", self.lines);
                    *self.skipped.entry(reason).or_default() += 1;
                }
            }
        }
    }
}
