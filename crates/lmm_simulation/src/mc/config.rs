//! Curve sampler configuration.
//!
//! This module provides the configuration type and builder for sampling
//! many independent single-step curve evolutions.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Path count below which sampling runs on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Quoting convention of the curve handed to the sampler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuoteConvention {
    /// Values are forward rates; paths use `advance`.
    #[default]
    Forward,
    /// Values are futures quotes; paths use `advance_futures`.
    Futures,
}

/// Curve sampler configuration.
///
/// Immutable configuration specifying sampling parameters.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use lmm_simulation::mc::{QuoteConvention, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .alpha(0.5)
///     .convention(QuoteConvention::Futures)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Number of independent paths.
    n_paths: usize,
    /// Optional base seed for reproducibility.
    seed: Option<u64>,
    /// Rotation angle between the two driving factors.
    alpha: f64,
    /// Quoting convention of input curves.
    convention: QuoteConvention,
    /// Paths below which sampling is sequential.
    parallel_threshold: usize,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the optional base seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the rotation angle.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the quoting convention of input curves.
    #[inline]
    pub fn convention(&self) -> QuoteConvention {
        self.convention
    }

    /// Returns the sequential/parallel cut-over.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Whether a run of `n_paths` should be spread over the thread pool.
    #[inline]
    pub fn should_parallelise(&self) -> bool {
        self.n_paths >= self.parallel_threshold
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `alpha` is not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if !self.alpha.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "alpha",
                value: format!("must be finite, got {}", self.alpha),
            });
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use lmm_simulation::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(50_000)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.alpha(), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    alpha: f64,
    convention: QuoteConvention,
    parallel_threshold: usize,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            n_paths: None,
            seed: None,
            alpha: 0.0,
            convention: QuoteConvention::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SimulationConfigBuilder {
    /// Sets the number of paths in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the base seed; path `i` is seeded with `seed + i`.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the rotation angle between the two driving factors.
    #[inline]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the quoting convention of input curves.
    #[inline]
    pub fn convention(mut self, convention: QuoteConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Sets the path count at which sampling switches to the thread pool.
    #[inline]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_paths` is not set or the result fails
    /// [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            n_paths,
            seed: self.seed,
            alpha: self.alpha,
            convention: self.convention,
            parallel_threshold: self.parallel_threshold,
        };

        config.validate()?;
        Ok(config)
    }
}
