//! Relative abundance templates over ranked transcript slots.
//!
//! A profile assigns a probability to each transcript rank. It's not tied to actual transcripts and
//! is paired with them later, when fragments are sampled.

pub use model::{FluxParams, Model};
pub use profile::Profile;

mod model;
mod profile;
