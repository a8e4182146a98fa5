use eyre::Result;
use rnasim_io_rs::{snp, ReadRecord};

pub use rnasim_io_rs::snp::{Kind, Record as Variant};

/// Load all variants in the input order. Unsupported variant types and malformed numbers abort
/// the loading.
pub fn load<R>(reader: &mut R) -> Result<Vec<Variant>>
where
    R: ReadRecord<Record = snp::Record> + ?Sized,
{
    let mut variants = Vec::new();
    reader.read_to_end(&mut variants)?;

    let singles = variants
        .iter()
        .filter(|x| matches!(x.kind(), Kind::Single(_)))
        .count();
    log::info!(
        "Loaded {} variant(s), {singles} single base substitution(s)",
        variants.len()
    );
    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_keeps_order() -> Result<()> {
        let content = "\
rs2\tsingle\tchr1\t5\tG
#rs0

rs1\tdeletion\tchr2\t1\t3
rs3\tinsertion\tchr1\t0\tAC
";
        let variants = load(&mut snp::Reader::new(Cursor::new(content)))?;
        assert_eq!(
            variants,
            [
                Variant::new("rs2".into(), Kind::Single("G".into()), "chr1".into(), 5),
                Variant::new("rs1".into(), Kind::Deletion(3), "chr2".into(), 1),
                Variant::new("rs3".into(), Kind::Insertion("AC".into()), "chr1".into(), 0),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_load_unsupported_type() {
        let content = "rs1\tindel\tchr1\t10\tA\n";
        assert!(load(&mut snp::Reader::new(Cursor::new(content))).is_err());
    }
}
