use derive_getters::Getters;
use derive_more::Constructor;
use eyre::{ensure, Result};
use std::fmt::{Display, Formatter};

/// Number of hits out of the total number of checked items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters, Constructor)]
pub struct Ratio {
    hits: u64,
    total: u64,
}

impl Ratio {
    pub(super) fn add(&mut self, hit: bool) {
        self.hits += hit as u64;
        self.total += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Fraction of hits. Fails if nothing was checked.
    pub fn fraction(&self) -> Result<f64> {
        ensure!(self.total > 0, "Fraction is undefined: nothing was checked");
        Ok(self.hits as f64 / self.total as f64)
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.fraction() {
            Ok(fraction) => write!(f, "{}/{} ({:.2}%)", self.hits, self.total, fraction * 100.0),
            Err(_) => write!(f, "{}/{} (n/a)", self.hits, self.total),
        }
    }
}
