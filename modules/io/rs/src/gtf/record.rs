#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use rnasim_core_rs::loc::{Interval, Orientation};

/// A single GTF line. The interval is converted to zero-based half-open coordinates, i.e. a GTF
/// feature `start..=end` becomes `[start - 1, end)`. Score and frame are kept verbatim.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, PartialEq, Default, Dissolve, Getters, Constructor)]
pub struct Record {
    seqid: String,
    source: String,
    feature: String,
    interval: Interval<u64>,
    score: String,
    orientation: Orientation,
    frame: String,
    attributes: Vec<(String, String)>,
}

impl Record {
    /// Value of the attribute with the given key. If the key is repeated, the last value wins.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup() {
        let record = Record {
            attributes: vec![
                ("gene_id".to_string(), "G1".to_string()),
                ("tag".to_string(), "basic".to_string()),
                ("tag".to_string(), "CCDS".to_string()),
            ],
            ..Default::default()
        };
        assert_eq!(record.attribute("gene_id"), Some("G1"));
        assert_eq!(record.attribute("tag"), Some("CCDS"));
        assert_eq!(record.attribute("transcript_id"), None);
    }
}
