// src/stats.rs

use crate::numeric::LossFloat;

/// Running arithmetic mean over a stream of values.
///
/// Uses the incremental update `mean += (x - mean) / n`, so long batches never
/// build up a large intermediate sum. The mean of an empty stream is
/// undefined and reported as NaN rather than zero, so an empty batch can
/// never be mistaken for a perfect one.
///
/// # Examples
///
/// ```rust
/// use lossgrad::RunningMean;
///
/// let mut stats = RunningMean::new();
/// for value in [2.0, 4.0, 6.0] {
///     stats.push(value);
/// }
/// assert_eq!(stats.count(), 3);
/// assert_eq!(stats.mean(), 4.0);
///
/// assert!(RunningMean::<f64>::new().mean().is_nan());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RunningMean<T> {
    count: usize,
    mean: T,
}

impl<T> RunningMean<T>
where
    T: LossFloat,
{
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: T::zero(),
        }
    }

    /// Folds one value into the running mean.
    pub fn push(&mut self, value: T) {
        self.count += 1;
        let count = T::from_usize(self.count);
        self.mean += (value - self.mean) / count;
    }

    /// Number of values accumulated so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic mean of the accumulated values, or NaN if none were pushed.
    pub fn mean(&self) -> T {
        if self.count == 0 { T::nan() } else { self.mean }
    }
}

impl<T> Default for RunningMean<T>
where
    T: LossFloat,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RunningMean;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_mean_is_nan() {
        let stats = RunningMean::<f64>::new();
        assert_eq!(stats.count(), 0);
        assert!(stats.mean().is_nan());
    }

    #[test]
    fn test_single_value_mean() {
        let mut stats = RunningMean::new();
        stats.push(7.5);
        assert_eq!(stats.count(), 1);
        assert_eq!(stats.mean(), 7.5);
    }

    #[test]
    fn test_mean_matches_batch_average() {
        let values = [1.0, -2.0, 4.5, 0.25, 10.0, -3.75];
        let mut stats = RunningMean::new();
        for v in values {
            stats.push(v);
        }
        let expected: f64 = values.iter().sum::<f64>() / values.len() as f64;
        assert_abs_diff_eq!(stats.mean(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_f32() {
        let mut stats = RunningMean::<f32>::new();
        stats.push(1.0);
        stats.push(2.0);
        assert_abs_diff_eq!(stats.mean(), 1.5f32, epsilon = 1e-6);
    }
}
