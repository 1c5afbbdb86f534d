use super::levels::{Difficulty, EnergyLevel};
use serde::{Deserialize, Serialize};

/// Time a resource takes, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Duration {
    pub value: f64,
    pub is_estimated: bool,
}

impl Duration {
    /// A learner-supplied estimate.
    pub fn estimated(minutes: f64) -> Self {
        Self {
            value: minutes,
            is_estimated: true,
        }
    }

    /// No estimate recorded.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn minutes(&self) -> f64 {
        self.value
    }
}

/// Derives the energy a resource needs from its difficulty and length.
///
/// High difficulty or more than two hours is high energy; medium difficulty
/// or more than one hour is medium; everything else is low.
pub fn calculate_energy_level(difficulty: Difficulty, minutes: f64) -> EnergyLevel {
    if difficulty == Difficulty::High || minutes > 120.0 {
        EnergyLevel::High
    } else if difficulty == Difficulty::Medium || minutes > 60.0 {
        EnergyLevel::Medium
    } else {
        EnergyLevel::Low
    }
}
