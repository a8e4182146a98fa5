// Format specification: https://mblab.wustl.edu/GTF22.html

// Tab-separated fields:
// 1. seqname: contig name
// 2. source
// 3. feature: exon, CDS, transcript, ...
// 4. start: 1-based, inclusive
// 5. end: 1-based, inclusive
// 6. score: float | .
// 7. strand: + | - | .
// 8. frame: 0 | 1 | 2 | .
// 9. attributes: key "value"; key "value"; ...

// Everything after '#' is a comment. Lines that can't be split into exactly 9 fields are skipped.

mod reader;
mod record;

pub use reader::{parse, Reader, Skip};
pub use record::Record;
