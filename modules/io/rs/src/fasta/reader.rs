use super::record::Record;
use crate::compression;
use crate::traits::ReadRecord;
use derive_getters::Dissolve;
use eyre::{Result, WrapErr};
use std::io::BufRead;
use std::path::Path;

/// A lenient FASTA reader that yields one record at a time.
///
/// - A line starting with '>' opens a new record, the rest of the line (without the line
///   terminator) is the record ID.
/// - All following lines up to the next header or the end of the input are concatenated into the
///   sequence. LF and CR-LF line terminators are stripped, nothing else is validated.
/// - Headers with an empty ID or without any sequence are skipped, as well as any lines before the
///   first header.
///
/// Names are decoded as UTF-8, invalid bytes are replaced with U+FFFD instead of failing the read.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Dissolve)]
pub struct Reader<R> {
    reader: R,
    header: Vec<u8>,
}

impl Reader<()> {
    /// Create a new FASTA reader from the given file path.
    /// Gzip compression is detected automatically based on the file signature.
    pub fn from_path(
        path: impl AsRef<Path>,
    ) -> Result<Reader<Box<dyn BufRead + Send + Sync + 'static>>> {
        let path = path.as_ref();
        let stream = compression::open(path)
            .wrap_err_with(|| format!("Failed to open FASTA file {}", path.display()))?;
        Ok(Reader::new(stream.boxed()))
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            header: Vec::new(),
        }
    }

    /// Consume everything up to and including the next LF.
    fn skip_line(&mut self) -> Result<()> {
        loop {
            let buffer = self.reader.fill_buf()?;
            if buffer.is_empty() {
                return Ok(());
            }
            match memchr::memchr(b'\n', buffer) {
                Some(pos) => {
                    self.reader.consume(pos + 1);
                    return Ok(());
                }
                None => {
                    let length = buffer.len();
                    self.reader.consume(length);
                }
            }
        }
    }

    /// Append all lines until the next header (or EOF) to the sequence buffer.
    fn read_seq(&mut self, seq: &mut Vec<u8>) -> Result<()> {
        seq.clear();

        // The buffer might end in the middle of a line, so '>' marks a header only at a line start
        let mut line_start = true;
        loop {
            let buffer = self.reader.fill_buf()?;
            if buffer.is_empty() || (line_start && buffer[0] == b'>') {
                break;
            }

            let consume = match memchr::memchr(b'\n', buffer) {
                Some(pos) => {
                    seq.extend_from_slice(&buffer[..pos]);
                    if seq.last() == Some(&b'\r') {
                        seq.pop();
                    }
                    line_start = true;
                    pos + 1
                }
                None => {
                    seq.extend_from_slice(buffer);
                    line_start = false;
                    buffer.len()
                }
            };
            self.reader.consume(consume);
        }

        // The last line might be missing its LF
        if seq.last() == Some(&b'\r') {
            seq.pop();
        }
        Ok(())
    }

    fn read_parts(&mut self, record: &mut Record) -> Result<bool> {
        let (id, seq) = record.raw();
        loop {
            let buffer = self.reader.fill_buf()?;
            if buffer.is_empty() {
                return Ok(false);
            }

            if buffer[0] != b'>' {
                // Lines before the first header don't belong to any record
                self.skip_line()?;
                continue;
            }
            self.reader.consume(1);

            self.header.clear();
            self.reader.read_until(b'\n', &mut self.header)?;
            if self.header.last() == Some(&b'\n') {
                self.header.pop();
            }
            if self.header.last() == Some(&b'\r') {
                self.header.pop();
            }
            id.clear();
            id.push_str(&String::from_utf8_lossy(&self.header));

            self.read_seq(seq)?;
            if id.is_empty() || seq.is_empty() {
                log::debug!("Skipping FASTA record without an ID or a sequence: '>{id}'");
                continue;
            }
            return Ok(true);
        }
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Record;

    /// Parse the next FASTA record into the given [Record] buffer.
    /// Returns `false` if there are no more records to read.
    ///
    /// If an error is returned, the buffer is left in an unspecified state, but can be reused for
    /// the next read.
    fn read_record(&mut self, buf: &mut Self::Record) -> Result<bool> {
        self.read_parts(buf)
    }
}
