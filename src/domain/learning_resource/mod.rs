//! Learning resources: the tracker's core aggregate and its vocabularies.

mod aggregate;
mod duration;
mod errors;
mod levels;

pub use aggregate::{LearningResource, NewLearningResource};
pub use duration::{calculate_energy_level, Duration};
pub use errors::LearningResourceError;
pub use levels::{Difficulty, EnergyLevel, ResourceStatus};

#[cfg(test)]
pub(crate) use aggregate::tests::sample_resource;
