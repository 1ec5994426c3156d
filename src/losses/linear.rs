// src/losses/linear.rs

use ndarray::{Array1, ArrayView1};

use crate::losses::LossFunction;
use crate::numeric::LossFloat;

/// Linear (L1 / absolute error) loss: `|predicted - target|` per element,
/// Manhattan distance per sample, three-way sign subgradient.
///
/// Every unit of error costs the same regardless of its size, which makes
/// this loss more robust to outliers than the quadratic one. The subgradient
/// at a zero difference is fixed to `0` by convention.
///
/// # Examples
///
/// ```rust
/// use lossgrad::{LinearLoss, LossFunction};
/// use ndarray::array;
///
/// let loss = LinearLoss::new();
/// assert_eq!(loss.sample_loss(3.0, 5.0), 2.0);
/// assert_eq!(loss.sample_loss_gradient(3.0, 5.0), -1.0);
/// assert_eq!(loss.sample_loss_gradient(5.0, 5.0), 0.0);
///
/// let predicted = array![[1.0, 2.0], [3.0, 3.0]];
/// let target = array![[1.0, 0.0], [3.0, 5.0]];
/// assert_eq!(loss.mean_loss(predicted.view(), target.view()), 2.0);
/// assert_eq!(
///     loss.loss_gradient(predicted.view(), target.view()),
///     array![[0.0, 1.0], [0.0, -1.0]],
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearLoss;

impl LinearLoss {
    pub fn new() -> Self {
        Self
    }
}

impl<T> LossFunction<T> for LinearLoss
where
    T: LossFloat,
{
    fn sample_loss(&self, predicted: T, target: T) -> T {
        (predicted - target).abs()
    }

    /// Manhattan distance between the two sample vectors.
    fn sample_loss_vec(&self, predicted: ArrayView1<'_, T>, target: ArrayView1<'_, T>) -> T {
        (&predicted - &target).mapv_into(|d| d.abs()).sum()
    }

    fn sample_loss_gradient(&self, predicted: T, target: T) -> T {
        (predicted - target).sign()
    }

    fn sample_loss_gradient_vec(
        &self,
        predicted: ArrayView1<'_, T>,
        target: ArrayView1<'_, T>,
    ) -> Array1<T> {
        (&predicted - &target).mapv_into(|d| d.sign())
    }
}
