//! Independent single-step evolutions of one curve.
//!
//! [`CurveSampler`] evolves `n_paths` copies of the same curve to one
//! horizon, each copy driven by its own [`CurveRng`], and reports per-bucket
//! statistics of the evolved values. Path `i` is seeded with `seed + i`, so
//! results do not depend on how rayon schedules the paths.

use lmm_core::{Curve, CurveError, Float};
use rayon::prelude::*;
use tracing::debug;

use super::config::{QuoteConvention, SimulationConfig};
use super::error::{ConfigError, SimulationError};
use crate::evolve::{advance, advance_futures, validate_horizon};
use crate::rng::CurveRng;

/// Per-bucket mean and standard error of evolved curve values.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketStatistics<T: Float> {
    times: Vec<T>,
    means: Vec<T>,
    std_errors: Vec<T>,
    n_paths: usize,
}

impl<T: Float> BucketStatistics<T> {
    /// Rebased tenor boundaries of the surviving buckets.
    #[inline]
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Sample mean of each surviving bucket's value.
    #[inline]
    pub fn means(&self) -> &[T] {
        &self.means
    }

    /// Standard error of each mean.
    #[inline]
    pub fn std_errors(&self) -> &[T] {
        &self.std_errors
    }

    /// Number of paths aggregated.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of surviving buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.means.len()
    }

    /// Whether every bucket expired.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

/// Running per-bucket mean and sum of squared deviations.
///
/// Updated one path at a time (Welford) and merged pairwise (Chan et al.),
/// so tightly clustered values keep an accurate variance.
#[derive(Clone, Debug)]
struct BucketAccumulator<T: Float> {
    mean: Vec<T>,
    m2: Vec<T>,
    count: usize,
}

impl<T: Float> BucketAccumulator<T> {
    fn new(n: usize) -> Self {
        Self {
            mean: vec![T::zero(); n],
            m2: vec![T::zero(); n],
            count: 0,
        }
    }

    fn observe(&mut self, values: &[T]) {
        self.count += 1;
        let n = T::from(self.count).unwrap_or(T::one());
        for ((mean, m2), &v) in self.mean.iter_mut().zip(self.m2.iter_mut()).zip(values) {
            let delta = v - *mean;
            *mean = *mean + delta / n;
            *m2 = *m2 + delta * (v - *mean);
        }
    }

    fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let na = T::from(self.count).unwrap_or(T::one());
        let nb = T::from(other.count).unwrap_or(T::one());
        let n = na + nb;
        for (((mean, m2), &mean_b), &m2_b) in self
            .mean
            .iter_mut()
            .zip(self.m2.iter_mut())
            .zip(&other.mean)
            .zip(&other.m2)
        {
            let delta = mean_b - *mean;
            *mean = *mean + delta * nb / n;
            *m2 = *m2 + m2_b + delta * delta * na * nb / n;
        }
        self.count += other.count;
    }

    fn finish(self, times: Vec<T>) -> BucketStatistics<T> {
        let n = T::from(self.count).unwrap_or(T::one());
        let std_errors = self
            .m2
            .iter()
            .map(|&m2| {
                if self.count < 2 {
                    return T::zero();
                }
                let var = m2 / (n - T::one());
                (var / n).sqrt()
            })
            .collect();

        BucketStatistics {
            times,
            means: self.mean,
            std_errors,
            n_paths: self.count,
        }
    }
}

/// Samples independent single-step evolutions of a curve.
///
/// # Examples
///
/// ```rust
/// use lmm_core::Curve;
/// use lmm_simulation::mc::{CurveSampler, QuoteConvention, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(2_000)
///     .alpha(0.3)
///     .convention(QuoteConvention::Futures)
///     .seed(7)
///     .build()
///     .unwrap();
/// let sampler = CurveSampler::new(config).unwrap();
///
/// let curve = Curve::flat(vec![1.0, 2.0, 3.0], 0.03_f64, 0.2).unwrap();
/// let stats = sampler.sample(1.0, &curve).unwrap();
///
/// assert_eq!(stats.times(), &[1.0, 2.0]);
/// assert_eq!(stats.n_paths(), 2_000);
/// ```
#[derive(Clone, Debug)]
pub struct CurveSampler {
    config: SimulationConfig,
}

impl CurveSampler {
    /// Creates a sampler after validating the configuration.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the sampler configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Evolves path `path_index` of the batch and returns the compacted
    /// surviving curve.
    pub fn sample_path<T: Float>(
        &self,
        u: T,
        curve: &Curve<T>,
        path_index: usize,
    ) -> Result<Curve<T>, CurveError> {
        let alpha = T::from(self.config.alpha()).unwrap_or(T::zero());
        let mut rng = CurveRng::for_path(self.config.seed().unwrap_or(0), path_index);
        let mut evolved = curve.clone();

        match self.config.convention() {
            QuoteConvention::Forward => advance(u, &mut evolved, alpha, &mut rng)?,
            QuoteConvention::Futures => advance_futures(u, &mut evolved, alpha, &mut rng)?,
        };

        evolved.compact();
        Ok(evolved)
    }

    /// Evolves every path and returns the surviving curves in path order.
    pub fn sample_curves<T>(&self, u: T, curve: &Curve<T>) -> Result<Vec<Curve<T>>, SimulationError>
    where
        T: Float + Send + Sync,
    {
        validate_horizon(u)?;
        let n_paths = self.config.n_paths();

        let curves = if self.config.should_parallelise() {
            (0..n_paths)
                .into_par_iter()
                .map(|i| self.sample_path(u, curve, i))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            (0..n_paths)
                .map(|i| self.sample_path(u, curve, i))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(curves)
    }

    /// Evolves every path and aggregates per-bucket statistics.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::Curve` if `u` is negative or non-finite.
    pub fn sample<T>(&self, u: T, curve: &Curve<T>) -> Result<BucketStatistics<T>, SimulationError>
    where
        T: Float + Send + Sync,
    {
        validate_horizon(u)?;

        let survivors = curve.times().iter().filter(|&&t| t > u).count();
        let n_paths = self.config.n_paths();

        let accumulator = if self.config.should_parallelise() {
            (0..n_paths)
                .into_par_iter()
                .try_fold(
                    || BucketAccumulator::new(survivors),
                    |mut acc, i| {
                        let evolved = self.sample_path(u, curve, i)?;
                        acc.observe(evolved.values());
                        Ok::<_, CurveError>(acc)
                    },
                )
                .try_reduce(
                    || BucketAccumulator::new(survivors),
                    |mut a, b| {
                        a.merge(&b);
                        Ok(a)
                    },
                )?
        } else {
            (0..n_paths).try_fold(BucketAccumulator::new(survivors), |mut acc, i| {
                let evolved = self.sample_path(u, curve, i)?;
                acc.observe(evolved.values());
                Ok::<_, CurveError>(acc)
            })?
        };

        let times = curve
            .times()
            .iter()
            .filter(|&&t| t > u)
            .map(|&t| t - u)
            .collect();
        let stats = accumulator.finish(times);

        debug!(
            n_paths,
            surviving = stats.len(),
            parallel = self.config.should_parallelise(),
            "sampled evolved curves"
        );

        Ok(stats)
    }
}
