//! Generator configuration
//!
//! Describes how a generator should be constructed, in a form that can be
//! loaded alongside the rest of a caller's configuration.

use serde::{Deserialize, Serialize};

use crate::rng::{InitError, Mrg32k3a};

/// How to construct a [`Mrg32k3a`]
///
/// # Example
/// ```
/// use mrg32k3a::GeneratorConfig;
///
/// let config = GeneratorConfig::State { values: [12345; 6] };
/// let mut rng = config.build().unwrap();
/// assert_eq!(rng.next(), 545508589);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Expand a 64-bit seed (never fails)
    Seed { seed: u64 },

    /// Install six explicit values: `s10, s11, s12, s20, s21, s22`
    State { values: [u32; 6] },
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig::Seed { seed: 0 }
    }
}

impl GeneratorConfig {
    /// Build the generator described by this configuration
    ///
    /// # Errors
    /// Only [`GeneratorConfig::State`] can fail, with the same errors as
    /// [`Mrg32k3a::from_six`].
    pub fn build(&self) -> Result<Mrg32k3a, InitError> {
        match *self {
            GeneratorConfig::Seed { seed } => Ok(Mrg32k3a::from_seed(seed)),
            GeneratorConfig::State {
                values: [s10, s11, s12, s20, s21, s22],
            } => Mrg32k3a::from_six(s10, s11, s12, s20, s21, s22),
        }
    }
}
