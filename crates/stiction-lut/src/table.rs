//! Pre-computed lookup table with linear interpolation.

use core::fmt;

use num_traits::{Float, NumCast};

use crate::error::LutError;
use crate::policy::OutOfBoundsPolicy;

/// Pre-computed samples of a scalar function for fast evaluation.
///
/// The table stores `(x_i, f(x_i))` pairs at `x_i = min + i·step` for
/// `i = 0 … N-1`, with `N = floor((max - min) / step) + 1`. `f(min)` is always
/// stored; `f(max)` is stored only when `max` is reached with an integer number
/// of steps. Queries inside `[min, max]` are answered by linear interpolation
/// between the two bracketing samples; queries past the last sample (the
/// partial last step) return the last sample. Queries outside `[min, max]`
/// follow the table's [`OutOfBoundsPolicy`].
///
/// # RT Safety
///
/// `evaluate()` is RT-safe:
/// - No heap allocations
/// - O(1) time complexity
/// - No syscalls or I/O
///
/// Construction is NOT RT-safe: it allocates and calls the sampled function
/// once per sample.
///
/// # Example
///
/// ```
/// use stiction_lut::LookUpTable;
///
/// let mut table = LookUpTable::new();
/// assert!(table.create(0.0, 1.0, 0.1, |x: f64| x.exp()));
///
/// let approx = table.evaluate(0.55)?;
/// assert!((approx - 0.55_f64.exp()).abs() < 1e-2);
/// # Ok::<(), stiction_lut::LutError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LookUpTable<T> {
    samples: Vec<(T, T)>,
    min: T,
    max: T,
    step: T,
    policy: OutOfBoundsPolicy,
}

impl<T: Float + fmt::Debug> Default for LookUpTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + fmt::Debug> LookUpTable<T> {
    /// Upper limit on the number of samples a single table may hold.
    pub const MAX_SAMPLES: usize = 1 << 26;

    /// Create an empty table that returns zero outside its domain.
    pub fn new() -> Self {
        Self::with_policy(OutOfBoundsPolicy::Zero)
    }

    /// Create an empty table with the given out-of-bounds policy.
    pub fn with_policy(policy: OutOfBoundsPolicy) -> Self {
        Self {
            samples: Vec::new(),
            min: T::zero(),
            max: T::zero(),
            step: T::zero(),
            policy,
        }
    }

    /// Build a table by sampling `f` over `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`LutError::InvalidDomain`] if `min > max`, `step <= 0`, or any
    /// bound is not finite.
    pub fn build<F>(min: T, max: T, step: T, mut f: F) -> Result<Self, LutError>
    where
        F: FnMut(T) -> T,
    {
        let mut table = Self::new();
        table.try_create(min, max, step, |x| Ok::<T, LutError>(f(x)))?;
        Ok(table)
    }

    /// Build a table from a fallible sampler.
    ///
    /// Sampling stops at the first error, which is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the domain error converted into `E`, or the first error
    /// produced by `f`.
    pub fn try_build<F, E>(min: T, max: T, step: T, f: F) -> Result<Self, E>
    where
        F: FnMut(T) -> Result<T, E>,
        E: From<LutError>,
    {
        let mut table = Self::new();
        table.try_create(min, max, step, f)?;
        Ok(table)
    }

    /// Set the out-of-bounds policy.
    pub fn with_out_of_bounds(mut self, policy: OutOfBoundsPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Evaluate and store `f` over `[min, max]`.
    ///
    /// Returns `false` and leaves the table unchanged when the domain is
    /// invalid (`min > max`, `step <= 0`, or a non-finite bound). `f` is called
    /// exactly once per sample, in increasing order of `x`.
    pub fn create<F>(&mut self, min: T, max: T, step: T, mut f: F) -> bool
    where
        F: FnMut(T) -> T,
    {
        self.try_create(min, max, step, |x| Ok::<T, LutError>(f(x)))
            .is_ok()
    }

    /// Fallible form of [`create`](Self::create).
    ///
    /// The table is replaced only when every sample succeeds.
    ///
    /// # Errors
    ///
    /// Returns the domain error converted into `E`, or the first error
    /// produced by `f`.
    pub fn try_create<F, E>(&mut self, min: T, max: T, step: T, mut f: F) -> Result<(), E>
    where
        F: FnMut(T) -> Result<T, E>,
        E: From<LutError>,
    {
        let count = sample_count(min, max, step)?;

        let mut samples = Vec::with_capacity(count);
        for i in 0..count {
            let offset = <T as NumCast>::from(i)
                .ok_or_else(|| LutError::invalid_domain(min, max, step))?;
            // Rounding must not push the last abscissa past `max`.
            let x = (min + offset * step).min(max);
            samples.push((x, f(x)?));
        }

        self.samples = samples;
        self.min = min;
        self.max = max;
        self.step = step;
        Ok(())
    }

    /// Check whether the table holds any samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Out-of-bounds policy in effect.
    pub fn policy(&self) -> OutOfBoundsPolicy {
        self.policy
    }

    /// Requested lower bound (zero for an empty table).
    pub fn min(&self) -> T {
        self.min
    }

    /// Requested upper bound (zero for an empty table).
    pub fn max(&self) -> T {
        self.max
    }

    /// Sampling step (zero for an empty table).
    pub fn step(&self) -> T {
        self.step
    }

    /// Requested `[min, max]` domain, or `None` before `create`.
    pub fn domain(&self) -> Option<(T, T)> {
        (!self.samples.is_empty()).then_some((self.min, self.max))
    }

    /// Raw `(x, f(x))` samples in increasing `x`.
    pub fn samples(&self) -> &[(T, T)] {
        &self.samples
    }

    /// Check that sample values never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.samples
            .windows(2)
            .all(|pair| matches!(pair, [(_, a), (_, b)] if a <= b))
    }

    /// Retrieve the approximated value of `f(x)`.
    ///
    /// Inside `[min, max]` the result is interpolated from the two bracketing
    /// samples and is exact at every sample point. Outside, the table's policy
    /// decides. A NaN query yields NaN, or `OutOfDomain` under
    /// [`OutOfBoundsPolicy::Fail`].
    ///
    /// # Errors
    ///
    /// - [`LutError::UninitializedTable`] if the table is empty.
    /// - [`LutError::OutOfDomain`] if `x` is outside `[min, max]` and the policy
    ///   is [`OutOfBoundsPolicy::Fail`].
    #[inline]
    pub fn evaluate(&self, x: T) -> Result<T, LutError> {
        let (Some(&(_, first)), Some(&(_, last))) = (self.samples.first(), self.samples.last())
        else {
            return Err(LutError::UninitializedTable);
        };

        if x.is_nan() || x < self.min || x > self.max {
            return match self.policy {
                OutOfBoundsPolicy::Fail => {
                    Err(LutError::out_of_domain(x, self.min, self.max))
                }
                _ if x.is_nan() => Ok(x),
                OutOfBoundsPolicy::Zero => Ok(T::zero()),
                OutOfBoundsPolicy::ClampToBound => Ok(if x < self.min { first } else { last }),
            };
        }

        let index = self.bracket(x);
        match (self.samples.get(index), self.samples.get(index.saturating_add(1))) {
            (Some(&(x0, y0)), Some(&(x1, y1))) => Ok(interpolate(x, (x0, y0), (x1, y1))),
            _ => Ok(last),
        }
    }

    /// Index `i` of the sample with `x_i <= x < x_{i+1}`, or the last index.
    ///
    /// The nominal index from `(x - min) / step` can be off by one through
    /// rounding; it is moved by at most one position against the stored
    /// abscissae.
    fn bracket(&self, x: T) -> usize {
        let last_index = self.samples.len().saturating_sub(1);
        let mut index = ((x - self.min) / self.step)
            .floor()
            .to_usize()
            .unwrap_or(last_index)
            .min(last_index);

        if index > 0 && self.samples.get(index).is_some_and(|&(xi, _)| x < xi) {
            index = index.saturating_sub(1);
        } else if self
            .samples
            .get(index.saturating_add(1))
            .is_some_and(|&(next, _)| next <= x)
        {
            index = index.saturating_add(1);
        }
        index
    }
}

/// Linear interpolation on `[x0, x1]`, bounded by the two sample values.
#[inline]
fn interpolate<T: Float>(x: T, (x0, y0): (T, T), (x1, y1): (T, T)) -> T {
    if x <= x0 {
        return y0;
    }

    let y = y0 + (y1 - y0) * (x - x0) / (x1 - x0);

    let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    if y < lo {
        lo
    } else if y > hi {
        hi
    } else {
        y
    }
}

fn sample_count<T: Float + fmt::Debug>(min: T, max: T, step: T) -> Result<usize, LutError> {
    let valid = min.is_finite() && max.is_finite() && step.is_finite();
    if !valid || min > max || step <= T::zero() {
        return Err(LutError::invalid_domain(min, max, step));
    }

    ((max - min) / step)
        .floor()
        .to_usize()
        .and_then(|steps| steps.checked_add(1))
        .filter(|&count| count <= LookUpTable::<T>::MAX_SAMPLES)
        .ok_or_else(|| LutError::invalid_domain(min, max, step))
}
