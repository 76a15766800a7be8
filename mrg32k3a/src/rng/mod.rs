//! Deterministic random number generation
//!
//! MRG32k3a combines two order-3 linear recurrences over the primes
//! `m1 = 4294967087` and `m2 = 4294944443`. A 64-bit seed is expanded into
//! the six-value state with the Stafford variant 13 mixer.

mod generator;
mod mix;
mod snapshot;

pub use generator::{InitError, Mrg32k3a, M1, M2};
pub use mix::stafford_mix13;
pub use snapshot::StateSnapshot;
