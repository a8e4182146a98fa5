pub use check::{alternative_bases, check, splice_sites};
pub use ratio::Ratio;
pub use report::Report;

mod check;
mod ratio;
mod report;
