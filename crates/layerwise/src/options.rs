use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tunable iteration budget for the layout pipeline.
///
/// The defaults reproduce the classic schedule: two phase I rounds and one phase II round of
/// crossing minimization, and one coordinate round. A zero count skips that phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutOptions {
    pub phase_one_iterations: usize,
    pub phase_two_iterations: usize,
    pub coordinate_iterations: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            phase_one_iterations: 2,
            phase_two_iterations: 1,
            coordinate_iterations: 1,
        }
    }
}

impl LayoutOptions {
    /// Parses options from JSON. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })
    }
}
