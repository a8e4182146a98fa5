pub mod compression;
pub mod fasta;
pub mod gtf;
pub mod snp;
mod traits;

pub use traits::{Parsed, ReadRecord};
