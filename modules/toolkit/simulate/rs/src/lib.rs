pub use config::Config;
pub use genome::Genome;
pub use simulation::Simulation;

pub mod annotation;
mod config;
pub mod expression;
mod genome;
pub mod sanity;
mod simulation;
pub mod variants;
