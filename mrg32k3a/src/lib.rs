//! MRG32k3a - Combined Multiple-Recursive Generator
//!
//! Deterministic pseudo-random number generation following L'Ecuyer's
//! MRG32k3a design.
//!
//! # Architecture
//!
//! - **rng**: The generator, its seed-expansion mixer and state snapshots
//! - **config**: Serializable description of how to build a generator
//!
//! # Critical Invariants
//!
//! 1. Neither three-value component of the state is ever all zero
//! 2. Component 1 values stay in `[0, m1)`, component 2 values in `[0, m2)`
//! 3. Every output lies in `[1, m1]`
//!
//! # Example
//! ```
//! use mrg32k3a::Mrg32k3a;
//!
//! let mut rng = Mrg32k3a::from_six(12345, 12345, 12345, 12345, 12345, 12345).unwrap();
//! assert_eq!(rng.next(), 545508589);
//! ```

// Module declarations
pub mod config;
pub mod rng;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use rng::{stafford_mix13, InitError, Mrg32k3a, StateSnapshot, M1, M2};
