use serde::{Deserialize, Serialize};

/// Weight profile applied by the score combiner. Weights are fractions of the
/// final score; the canonical profile sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub productivity: f64,
    pub completion: f64,
    pub on_time: f64,
    pub review: f64,
    pub hr_feedback: f64,
}

impl ScoreWeights {
    /// The canonical five-factor profile.
    pub const fn standard() -> Self {
        Self {
            productivity: 0.20,
            completion: 0.25,
            on_time: 0.25,
            review: 0.20,
            hr_feedback: 0.10,
        }
    }

    /// Alternative profile weighing only delivery: completion 0.6, on-time 0.4.
    pub const fn delivery_focus() -> Self {
        Self {
            productivity: 0.0,
            completion: 0.6,
            on_time: 0.4,
            review: 0.0,
            hr_feedback: 0.0,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::standard()
    }
}
