//! # Random Number Generation
//!
//! Randomness for curve evolution is an explicit capability passed in by
//! the caller; there is no process-wide generator.
//!
//! ## Module Structure
//!
//! - [`NormalSource`]: trait for drawing standard normal variates
//! - [`CurveRng`]: seeded PRNG wrapper around `rand::StdRng`
//! - [`ScriptedNormals`]: replays caller-supplied draws
//!
//! ## Usage Example
//!
//! ```rust
//! use lmm_simulation::rng::{CurveRng, NormalSource};
//!
//! let mut rng = CurveRng::from_seed(12345);
//! let (z0, z1) = rng.next_pair();
//! # let _ = (z0, z1);
//! ```

mod prng;
mod source;

pub use prng::CurveRng;
pub use source::{NormalSource, ScriptedNormals};

#[cfg(test)]
mod tests;
