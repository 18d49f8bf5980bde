//! # lmm_simulation: Curve Evolution for the Two-Factor LIBOR Market Model
//!
//! ## Layer 3 Role
//!
//! lmm_simulation rolls curves from `lmm_core` forward in time:
//! - Standard normal draw capability and seeded PRNG (`rng`)
//! - Futures-curve evolution and forward-curve advance (`evolve`)
//! - One-step Monte Carlo sampling with per-bucket statistics (`mc`)
//!
//! ## Randomness
//!
//! There is no global generator. Every evolution call takes a
//! [`rng::NormalSource`] from the caller; the sampler gives each path its
//! own [`rng::CurveRng`].
//!
//! ## Usage Example
//!
//! ```rust
//! use lmm_core::Curve;
//! use lmm_simulation::evolve::advance;
//! use lmm_simulation::rng::CurveRng;
//!
//! let mut curve = Curve::new(
//!     vec![0.5, 1.0, 1.5, 2.0],
//!     vec![0.030, 0.032, 0.034, 0.036],
//!     vec![0.010, 0.011, 0.012, 0.013],
//! )
//! .unwrap();
//!
//! let mut rng = CurveRng::from_seed(42);
//! let window = advance(1.0, &mut curve, 0.25, &mut rng).unwrap();
//!
//! assert_eq!(window.len(), 2);
//! assert_eq!(curve.times(), &[0.5, 1.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod evolve;
pub mod mc;
pub mod rng;

pub use evolve::{advance, advance_futures};
pub use mc::{ConfigError, CurveSampler, SimulationConfig, SimulationError};
pub use rng::{CurveRng, NormalSource};
