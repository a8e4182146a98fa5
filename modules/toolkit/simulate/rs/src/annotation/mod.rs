pub use annotation::Annotation;
pub use builder::{AnnotationBuilder, Skip};
pub use stats::Stats;
pub use transcript::Transcript;

#[allow(clippy::module_inception)]
mod annotation;
mod builder;
mod stats;
mod transcript;
