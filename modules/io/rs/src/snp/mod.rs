// Tab-separated SNP table, one variant per line:
// 1. id: variant identifier (e.g. rs123)
// 2. type: single | deletion | insertion
// 3. chromosome: contig name
// 4. position: integer offset into the contig
// 5. data: alternative base (single), deleted length (deletion), inserted bases (insertion)

// Blank lines, lines starting with '#', and lines without exactly 5 fields are skipped.
// Unknown variant types and malformed integers are errors.

mod reader;
mod record;

pub use reader::{parse, Reader, Skip};
pub use record::{Kind, Record};
