use crate::annotation::AnnotationBuilder;
use crate::expression::{Model, Profile};
use derive_getters::Dissolve;
use derive_more::Constructor;

#[derive(Clone, PartialEq, Debug, Constructor, Dissolve)]
pub struct Config {
    // Expression profile
    pub expression: Model,
    pub slots: usize,
    // Input validation
    pub sanity_check: bool,
    // Log annotation statistics
    pub verbose: bool,
    // Annotation parameters
    pub max_merged_intron: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            expression: Model::default(),
            slots: Profile::DEFAULT_SLOTS,
            sanity_check: false,
            verbose: false,
            max_merged_intron: AnnotationBuilder::MAX_MERGED_INTRON,
        }
    }
}
