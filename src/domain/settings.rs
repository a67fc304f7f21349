use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

/// Solver toggles and tuning constants. One copy lives in each world.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Clamp the accumulated impulse instead of each incremental impulse.
    pub accumulate_impulses: bool,
    /// Carry impulses over from the previous step and apply them up front.
    pub warm_starting: bool,
    /// Feed positional error back as a velocity bias.
    pub position_correction: bool,
    /// Penetration tolerated before contacts push back (slop).
    pub allowed_penetration: f32,
    /// Fraction of contact penetration removed per step.
    pub bias_factor: f32,
}

impl SolverSettings {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Bias factor actually used by contacts this step.
    #[inline]
    pub fn contact_bias_factor(&self) -> f32 {
        if self.position_correction {
            self.bias_factor
        } else {
            0.0
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            accumulate_impulses: true,
            warm_starting: true,
            position_correction: true,
            allowed_penetration: 0.01,
            bias_factor: 0.2,
        }
    }
}
