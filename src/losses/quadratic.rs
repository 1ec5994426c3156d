// src/losses/quadratic.rs

use ndarray::{Array1, ArrayView1};

use crate::losses::LossFunction;
use crate::numeric::LossFloat;

/// Quadratic (squared error) loss: `(predicted - target)² / 2` per element,
/// half the squared Euclidean distance per sample, plain difference as the
/// gradient.
///
/// The `1/2` factor keeps the gradient free of a stray factor of two, so
/// `sample_loss_gradient` is exactly `predicted - target`. Large errors are
/// penalized quadratically, which makes this loss sensitive to outliers.
///
/// # Examples
///
/// ```rust
/// use lossgrad::{LossFunction, QuadraticLoss};
///
/// let loss = QuadraticLoss::new();
/// assert_eq!(loss.sample_loss(1.0, 4.0), 4.5);
/// assert_eq!(loss.sample_loss_gradient(1.0, 4.0), -3.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticLoss;

impl QuadraticLoss {
    pub fn new() -> Self {
        Self
    }
}

impl<T> LossFunction<T> for QuadraticLoss
where
    T: LossFloat,
{
    fn sample_loss(&self, predicted: T, target: T) -> T {
        let diff = predicted - target;
        T::from_f64(0.5) * diff * diff
    }

    /// Half the squared Euclidean distance between the two sample vectors.
    fn sample_loss_vec(&self, predicted: ArrayView1<'_, T>, target: ArrayView1<'_, T>) -> T {
        let squared = (&predicted - &target).mapv_into(|d| d * d).sum();
        T::from_f64(0.5) * squared
    }

    fn sample_loss_gradient(&self, predicted: T, target: T) -> T {
        predicted - target
    }

    fn sample_loss_gradient_vec(
        &self,
        predicted: ArrayView1<'_, T>,
        target: ArrayView1<'_, T>,
    ) -> Array1<T> {
        &predicted - &target
    }
}
