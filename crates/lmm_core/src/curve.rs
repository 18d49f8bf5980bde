//! Tenor-bucketed curve with a movable visible window.
//!
//! A [`Curve`] owns three index-aligned buffers (tenor boundaries, values and
//! volatilities) and a [`CurveWindow`] selecting the buckets that are still
//! alive. Evolving a curve narrows the window instead of copying storage.

use std::ops::Range;

use num_traits::Float;

use crate::error::CurveError;
use crate::par;

/// Visible `(offset, len)` slice of a curve's backing buffers.
///
/// # Example
///
/// ```
/// use lmm_core::CurveWindow;
///
/// let window = CurveWindow::new(0, 3).consume(2);
/// assert_eq!(window.offset(), 2);
/// assert_eq!(window.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CurveWindow {
    offset: usize,
    len: usize,
}

impl CurveWindow {
    /// Create a window starting at `offset` covering `len` buckets.
    #[inline]
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Position of the first visible bucket in the backing buffers.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of visible buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no bucket is visible.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Buffer index range covered by the window.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Drop up to `count` leading buckets.
    ///
    /// Consuming more buckets than are visible yields an empty window
    /// positioned at the end of the buffers.
    #[inline]
    pub fn consume(self, count: usize) -> Self {
        let count = count.min(self.len);
        Self {
            offset: self.offset + count,
            len: self.len - count,
        }
    }
}

/// A single tenor bucket `(t[j-1], t[j]]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket<T: Float> {
    /// Right boundary `t[j]` of the bucket
    pub time: T,
    /// Forward rate or futures quote, depending on the active convention
    pub value: T,
    /// At-the-money implied volatility
    pub vol: T,
}

/// Forward or futures curve over tenor buckets.
///
/// Bucket `j` covers `(t[j-1], t[j]]` with an implicit `t[-1] = 0`. The
/// `values` buffer holds either forward rates or futures quotes; the curve
/// does not record which convention is active.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use lmm_core::Curve;
///
/// let curve = Curve::new(
///     vec![1.0, 2.0, 3.0],
///     vec![0.03, 0.035, 0.04],
///     vec![0.01, 0.01, 0.01],
/// ).unwrap();
///
/// assert_eq!(curve.len(), 3);
/// assert_eq!(curve.times(), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Curve<T: Float> {
    times: Vec<T>,
    values: Vec<T>,
    vols: Vec<T>,
    window: CurveWindow,
}

impl<T: Float> Curve<T> {
    /// Construct a curve from tenor boundaries, values and volatilities.
    ///
    /// # Arguments
    ///
    /// * `times` - Tenor boundaries, positive and strictly increasing
    /// * `values` - Forward rates or futures quotes
    /// * `vols` - At-the-money implied volatilities
    ///
    /// # Returns
    ///
    /// * `Ok(Curve)` - Curve whose window covers every bucket
    /// * `Err(CurveError::LengthMismatch)` - Sequences differ in length
    /// * `Err(CurveError::NonFiniteInput)` - NaN or infinite entry
    /// * `Err(CurveError::NonPositiveTime)` - `times[0] <= 0`
    /// * `Err(CurveError::NonIncreasingTimes)` - Boundaries not strictly increasing
    pub fn new(times: Vec<T>, values: Vec<T>, vols: Vec<T>) -> Result<Self, CurveError> {
        if times.len() != values.len() || times.len() != vols.len() {
            return Err(CurveError::LengthMismatch {
                times: times.len(),
                values: values.len(),
                vols: vols.len(),
            });
        }

        validate_times(&times)?;
        check_finite("values", &values)?;
        check_finite("vols", &vols)?;

        let window = CurveWindow::new(0, times.len());
        Ok(Self {
            times,
            values,
            vols,
            window,
        })
    }

    /// Construct a curve with a single value and volatility on every bucket.
    ///
    /// # Example
    ///
    /// ```
    /// use lmm_core::Curve;
    ///
    /// let curve = Curve::flat(vec![0.5, 1.0], 0.02_f64, 0.0).unwrap();
    /// assert_eq!(curve.values(), &[0.02, 0.02]);
    /// ```
    pub fn flat(times: Vec<T>, value: T, vol: T) -> Result<Self, CurveError> {
        let n = times.len();
        Self::new(times, vec![value; n], vec![vol; n])
    }

    /// Curve with no buckets.
    pub fn empty() -> Self {
        Self {
            times: Vec::new(),
            values: Vec::new(),
            vols: Vec::new(),
            window: CurveWindow::default(),
        }
    }

    /// Number of visible buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether no bucket is visible.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Current visible window over the backing buffers.
    #[inline]
    pub fn window(&self) -> CurveWindow {
        self.window
    }

    /// Visible tenor boundaries.
    #[inline]
    pub fn times(&self) -> &[T] {
        &self.times[self.window.range()]
    }

    /// Visible forward rates or futures quotes.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values[self.window.range()]
    }

    /// Visible volatilities.
    #[inline]
    pub fn vols(&self) -> &[T] {
        &self.vols[self.window.range()]
    }

    /// Visible bucket `j`, if any.
    pub fn bucket(&self, j: usize) -> Option<Bucket<T>> {
        if j >= self.len() {
            return None;
        }
        let i = self.window.offset() + j;
        Some(Bucket {
            time: self.times[i],
            value: self.values[i],
            vol: self.vols[i],
        })
    }

    /// Iterate over the visible buckets in tenor order.
    pub fn iter(&self) -> impl Iterator<Item = Bucket<T>> + '_ {
        self.times()
            .iter()
            .zip(self.values())
            .zip(self.vols())
            .map(|((&time, &value), &vol)| Bucket { time, value, vol })
    }

    /// Split borrow of the visible buffers: `(times, values, vols)`.
    ///
    /// Only the values are mutable. Tenor boundaries move through
    /// [`Curve::rebase`].
    #[inline]
    pub fn buckets_mut(&mut self) -> (&[T], &mut [T], &[T]) {
        let range = self.window.range();
        (
            &self.times[range.clone()],
            &mut self.values[range.clone()],
            &self.vols[range],
        )
    }

    /// Move the valuation time forward by `u`.
    ///
    /// Drops every leading bucket with `t[j] <= u` and shifts the surviving
    /// boundaries to `t[j] - u`. Survivors stay positive and keep their order.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidHorizon` if `u` is negative or non-finite;
    /// the curve is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use lmm_core::Curve;
    ///
    /// let mut curve = Curve::flat(vec![1.0, 2.0, 3.0], 0.03_f64, 0.01).unwrap();
    /// let window = curve.rebase(2.0).unwrap();
    ///
    /// assert_eq!(window.len(), 1);
    /// assert_eq!(curve.times(), &[1.0]);
    /// ```
    pub fn rebase(&mut self, u: T) -> Result<CurveWindow, CurveError> {
        if !u.is_finite() || u < T::zero() {
            return Err(CurveError::InvalidHorizon {
                u: u.to_f64().unwrap_or(f64::NAN),
            });
        }

        let expired = self.times().iter().take_while(|&&t| t <= u).count();
        let window = self.consume(expired);
        for t in &mut self.times[window.range()] {
            *t = *t - u;
        }
        Ok(window)
    }

    /// Drop up to `count` leading buckets and return the new window.
    ///
    /// Storage is not touched; only the window moves.
    #[inline]
    pub fn consume(&mut self, count: usize) -> CurveWindow {
        self.window = self.window.consume(count);
        self.window
    }

    /// Move the visible window to the start of fresh storage.
    ///
    /// Releases the memory held by consumed buckets. The visible contents
    /// are unchanged.
    pub fn compact(&mut self) {
        if self.window.offset() == 0 && self.window.len() == self.times.len() {
            return;
        }
        let range = self.window.range();
        self.times = self.times[range.clone()].to_vec();
        self.values = self.values[range.clone()].to_vec();
        self.vols = self.vols[range].to_vec();
        self.window = CurveWindow::new(0, self.times.len());
    }

    /// Par coupon of the visible buckets read as forward rates.
    ///
    /// See [`par::par_coupon`].
    pub fn par_coupon(&self) -> Result<T, CurveError> {
        par::par_coupon(self.times(), self.values())
    }
}

impl<T: Float> Default for Curve<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Check that tenor boundaries are finite, positive and strictly increasing.
///
/// # Example
///
/// ```
/// use lmm_core::curve::validate_times;
///
/// assert!(validate_times(&[0.5_f64, 1.0, 2.0]).is_ok());
/// assert!(validate_times(&[1.0_f64, 1.0]).is_err());
/// ```
pub fn validate_times<T: Float>(times: &[T]) -> Result<(), CurveError> {
    check_finite("times", times)?;

    if let Some(&first) = times.first() {
        if first <= T::zero() {
            return Err(CurveError::NonPositiveTime {
                t: first.to_f64().unwrap_or(0.0),
            });
        }
    }

    for (i, w) in times.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(CurveError::NonIncreasingTimes {
                index: i + 1,
                prev: w[0].to_f64().unwrap_or(0.0),
                t: w[1].to_f64().unwrap_or(0.0),
            });
        }
    }

    Ok(())
}

fn check_finite<T: Float>(field: &'static str, xs: &[T]) -> Result<(), CurveError> {
    match xs.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(CurveError::NonFiniteInput { field, index }),
        None => Ok(()),
    }
}
