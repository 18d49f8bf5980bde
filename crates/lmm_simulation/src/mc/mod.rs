//! One-step Monte Carlo sampling of evolved curves.
//!
//! # Architecture
//!
//! ```text
//! CurveSampler
//! ├── SimulationConfig  (paths, seed, alpha, convention)
//! ├── CurveRng          (one generator per path, seed + path index)
//! └── Orchestration
//!     ├── sample_path()     single evolved curve
//!     ├── sample_curves()   every evolved curve, path order
//!     └── sample()          per-bucket mean and standard error
//! ```
//!
//! Every path evolves the same starting curve to the same horizon. Chaining
//! horizons along one path is left to the caller.

mod config;
mod error;
mod sampler;

pub use config::{
    QuoteConvention, SimulationConfig, SimulationConfigBuilder, DEFAULT_PARALLEL_THRESHOLD,
    MAX_PATHS,
};
pub use error::{ConfigError, SimulationError};
pub use sampler::{BucketStatistics, CurveSampler};
