//! MRG32k3a combined multiple-recursive generator
//!
//! Two order-3 recurrences, one per prime modulus, combined into a single
//! output stream with a period of roughly 2^191.
//!
//! # Algorithm
//!
//! ```text
//! p1 = (a12 * s11 - a13n * s10) mod m1      s10 <- s11, s11 <- s12, s12 <- p1
//! p2 = (a21 * s22 - a23n * s20) mod m2      s20 <- s21, s21 <- s22, s22 <- p2
//! ```
//!
//! The output combines the component heads `s12 - s22` modulo `m1`, with a
//! zero difference mapped to `m1`, so outputs always lie in `[1, m1]`.
//!
//! # Determinism
//!
//! Same seed → same sequence. `from_six(12345, ..)` reproduces L'Ecuyer's
//! reference sequence starting at its first value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::mix::stafford_mix13;
use super::snapshot::StateSnapshot;

/// Modulus of component 1
pub const M1: i64 = 4_294_967_087;

/// Modulus of component 2
pub const M2: i64 = 4_294_944_443;

const A12: i64 = 1_403_580;
const A13N: i64 = 810_728;
const A21: i64 = 527_612;
const A23N: i64 = 1_370_589;

/// Increment applied to the seed accumulator before each mix
const SEED_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// 1 / (m1 + 1)
const NORM: f64 = 2.328_306_549_295_727_688e-10;

/// Errors that can occur when installing an explicit generator state
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("s10, s11 and s12 cannot be all zero")]
    AllZeroComponent1,

    #[error("s20, s21 and s22 cannot be all zero")]
    AllZeroComponent2,

    #[error("s10 ({s10}), s11 ({s11}), and s12 ({s12}) must be smaller than {bound}")]
    OutOfRangeComponent1 {
        s10: u32,
        s11: u32,
        s12: u32,
        bound: i64,
    },

    #[error("s20 ({s20}), s21 ({s21}), and s22 ({s22}) must be smaller than {bound}")]
    OutOfRangeComponent2 {
        s20: u32,
        s21: u32,
        s22: u32,
        bound: i64,
    },
}

/// Check that six values form a legal, non-degenerate state.
///
/// All-zero checks run before range checks.
pub(crate) fn validate(values: [u32; 6]) -> Result<(), InitError> {
    let [s10, s11, s12, s20, s21, s22] = values;

    if s10 == 0 && s11 == 0 && s12 == 0 {
        return Err(InitError::AllZeroComponent1);
    }
    if s20 == 0 && s21 == 0 && s22 == 0 {
        return Err(InitError::AllZeroComponent2);
    }
    if [s10, s11, s12].iter().any(|&s| i64::from(s) >= M1) {
        return Err(InitError::OutOfRangeComponent1 {
            s10,
            s11,
            s12,
            bound: M1,
        });
    }
    if [s20, s21, s22].iter().any(|&s| i64::from(s) >= M2) {
        return Err(InitError::OutOfRangeComponent2 {
            s20,
            s21,
            s22,
            bound: M2,
        });
    }

    Ok(())
}

/// Deterministic random number generator using MRG32k3a
///
/// Each instance owns its state; give every thread its own generator.
///
/// # Example
/// ```
/// use mrg32k3a::Mrg32k3a;
///
/// let mut rng = Mrg32k3a::from_seed(12345);
/// let value = rng.next();
/// assert!(value >= 1 && value <= mrg32k3a::M1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "StateSnapshot", try_from = "StateSnapshot")]
pub struct Mrg32k3a {
    // Component 1, each in [0, m1)
    s10: i64,
    s11: i64,
    s12: i64,
    // Component 2, each in [0, m2)
    s20: i64,
    s21: i64,
    s22: i64,
}

impl Default for Mrg32k3a {
    /// The all-ones state used before any explicit initialization.
    fn default() -> Self {
        Self {
            s10: 1,
            s11: 1,
            s12: 1,
            s20: 1,
            s21: 1,
            s22: 1,
        }
    }
}

impl Mrg32k3a {
    /// Create a generator by expanding a 64-bit seed
    ///
    /// Every seed is accepted. The expanded state is not checked for an
    /// all-zero component; the chance of one is about 2^-96 and checking
    /// would change the sequence for the affected seeds.
    ///
    /// # Example
    /// ```
    /// use mrg32k3a::Mrg32k3a;
    ///
    /// let mut a = Mrg32k3a::from_seed(42);
    /// let mut b = Mrg32k3a::from_seed(42);
    /// assert_eq!(a.next(), b.next());
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = Self::default();
        rng.reseed(seed);
        rng
    }

    /// Overwrite the state by expanding a 64-bit seed
    ///
    /// Equivalent to replacing `self` with [`Mrg32k3a::from_seed`].
    pub fn reseed(&mut self, seed: u64) {
        let mut acc = seed;
        let mut expand = |modulus: i64| {
            acc = acc.wrapping_add(SEED_GAMMA);
            // Remainder is below the modulus, so it fits in i64
            (stafford_mix13(acc) % modulus as u64) as i64
        };

        self.s10 = expand(M1);
        self.s11 = expand(M1);
        self.s12 = expand(M1);
        self.s20 = expand(M2);
        self.s21 = expand(M2);
        self.s22 = expand(M2);
    }

    /// Create a generator from an explicit state
    ///
    /// The first three values must lie in `[0, m1)` and the last three in
    /// `[0, m2)`; neither triple may be all zero. One value is generated and
    /// thrown away so the output lines up with L'Ecuyer's reference
    /// implementation.
    ///
    /// # Errors
    /// Returns the first violated constraint, checking all-zero triples
    /// before ranges.
    ///
    /// # Example
    /// ```
    /// use mrg32k3a::{InitError, Mrg32k3a};
    ///
    /// let mut rng = Mrg32k3a::from_six(12345, 12345, 12345, 12345, 12345, 12345).unwrap();
    /// assert_eq!(rng.next(), 545508589);
    ///
    /// let err = Mrg32k3a::from_six(0, 0, 0, 1, 1, 1).unwrap_err();
    /// assert_eq!(err, InitError::AllZeroComponent1);
    /// ```
    pub fn from_six(
        s10: u32,
        s11: u32,
        s12: u32,
        s20: u32,
        s21: u32,
        s22: u32,
    ) -> Result<Self, InitError> {
        let mut rng = Self::restore(StateSnapshot {
            s10,
            s11,
            s12,
            s20,
            s21,
            s22,
        })?;
        rng.next();
        Ok(rng)
    }

    /// Rebuild a generator from a snapshot
    ///
    /// Validates like [`Mrg32k3a::from_six`] but does not discard a value:
    /// the restored generator continues exactly where the snapshot was taken.
    ///
    /// # Example
    /// ```
    /// use mrg32k3a::Mrg32k3a;
    ///
    /// let mut rng = Mrg32k3a::from_seed(7);
    /// rng.next();
    ///
    /// let mut resumed = Mrg32k3a::restore(rng.snapshot()).unwrap();
    /// assert_eq!(rng.next(), resumed.next());
    /// ```
    pub fn restore(snapshot: StateSnapshot) -> Result<Self, InitError> {
        validate(snapshot.values())?;

        Ok(Self {
            s10: i64::from(snapshot.s10),
            s11: i64::from(snapshot.s11),
            s12: i64::from(snapshot.s12),
            s20: i64::from(snapshot.s20),
            s21: i64::from(snapshot.s21),
            s22: i64::from(snapshot.s22),
        })
    }

    /// Capture the current state (for checkpointing/replay)
    pub fn snapshot(&self) -> StateSnapshot {
        // Every value is below m1 < 2^32
        StateSnapshot {
            s10: self.s10 as u32,
            s11: self.s11 as u32,
            s12: self.s12 as u32,
            s20: self.s20 as u32,
            s21: self.s21 as u32,
            s22: self.s22 as u32,
        }
    }

    /// Generate the next value in `[1, m1]`
    ///
    /// Returns the combination of the current component heads, then advances
    /// both recurrences. Products stay below 2^53, so `i64` arithmetic is
    /// exact.
    ///
    /// # Example
    /// ```
    /// use mrg32k3a::{Mrg32k3a, M1};
    ///
    /// // Equal heads combine to zero, which maps to m1
    /// let mut rng = Mrg32k3a::default();
    /// assert_eq!(rng.next(), M1);
    /// ```
    pub fn next(&mut self) -> i64 {
        let r = self.s12 - self.s22;

        let p1 = (A12 * self.s11 - A13N * self.s10).rem_euclid(M1);
        self.s10 = self.s11;
        self.s11 = self.s12;
        self.s12 = p1;

        let p2 = (A21 * self.s22 - A23N * self.s20).rem_euclid(M2);
        self.s20 = self.s21;
        self.s21 = self.s22;
        self.s22 = p2;

        if r > 0 {
            r
        } else {
            r + M1
        }
    }

    /// Generate random f64 in range (0.0, 1.0)
    ///
    /// Scales [`Mrg32k3a::next`] by `1 / (m1 + 1)`, as L'Ecuyer's
    /// floating-point version does.
    ///
    /// # Example
    /// ```
    /// use mrg32k3a::Mrg32k3a;
    ///
    /// let mut rng = Mrg32k3a::from_seed(12345);
    /// let u = rng.next_f64();
    /// assert!(u > 0.0 && u < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        self.next() as f64 * NORM
    }

    /// Generate random value in range [min, max)
    ///
    /// Draws from at most `m1` distinct outcomes, so ranges wider than `m1`
    /// are not fully covered.
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use mrg32k3a::Mrg32k3a;
    ///
    /// let mut rng = Mrg32k3a::from_seed(12345);
    /// let roll = rng.range(1, 7);
    /// assert!((1..7).contains(&roll));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = (self.next() - 1) as u64;
        let range_size = max.abs_diff(min);
        min + (value % range_size) as i64
    }
}

impl From<Mrg32k3a> for StateSnapshot {
    fn from(rng: Mrg32k3a) -> Self {
        rng.snapshot()
    }
}

impl TryFrom<StateSnapshot> for Mrg32k3a {
    type Error = InitError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        Self::restore(snapshot)
    }
}
