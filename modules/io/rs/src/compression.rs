use eyre::{ensure, Result, WrapErr};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An opened input file, decompressed on the fly if needed.
pub enum Stream {
    PlainText(File),
    Gzip(MultiGzDecoder<File>),
}

impl Stream {
    pub fn boxed(self) -> Box<dyn BufRead + Send + Sync + 'static> {
        match self {
            Stream::PlainText(file) => Box::new(BufReader::new(file)),
            Stream::Gzip(decoder) => Box::new(BufReader::new(decoder)),
        }
    }
}

/// Open the file at the given path. The compression is detected from the file signature, and
/// anything that is not recognized as gzip is read as plain text.
pub fn open(path: impl AsRef<Path>) -> Result<Stream> {
    let path = path.as_ref();
    ensure!(path.exists(), "File {} does not exist", path.display());

    let kind = infer::get_from_path(path)
        .wrap_err_with(|| format!("Failed to read the signature of {}", path.display()))?;
    let file = File::open(path).wrap_err_with(|| format!("Failed to open {}", path.display()))?;

    let stream = match kind.map(|x| (x.extension(), x.mime_type())) {
        Some(("gz", "application/gzip")) => Stream::Gzip(MultiGzDecoder::new(file)),
        _ => Stream::PlainText(file),
    };
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::path::PathBuf;

    #[test]
    fn test_open_plain_and_gzip() -> Result<()> {
        let resources = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources");

        let mut plain = String::new();
        let stream = open(resources.join("example.fa"))?;
        assert!(matches!(stream, Stream::PlainText(_)));
        stream.boxed().read_to_string(&mut plain)?;

        let mut gzip = String::new();
        let stream = open(resources.join("example.fa.gz"))?;
        assert!(matches!(stream, Stream::Gzip(_)));
        stream.boxed().read_to_string(&mut gzip)?;

        assert!(!plain.is_empty());
        assert_eq!(plain, gzip);
        Ok(())
    }

    #[test]
    fn test_open_missing_file() {
        assert!(open("/definitely/not/here.fa").is_err());
    }
}
