// src/losses/mod.rs
// Interchangeable loss strategies for training loops.
// Each strategy computes losses and subgradients at scalar, vector, and
// matrix granularity; the matrix-level operations are provided row loops.

pub mod linear;
pub mod quadratic;


pub use linear::LinearLoss;
pub use quadratic::QuadraticLoss;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::numeric::LossFloat;
use crate::stats::RunningMean;

/// Capability contract shared by all loss strategies.
///
/// A training loop holds a `&dyn LossFunction<T>` and drives whichever loss
/// family the caller selected, without knowing which one it is. Rows of a
/// matrix are samples; `predicted` and `target` must have identical shapes
/// at every granularity. Shape conformance is the caller's responsibility
/// and is enforced by `ndarray`'s own elementwise contract, not here.
///
/// Every operation is a stateless pure computation; non-finite inputs are
/// not rejected and propagate arithmetically into the result.
pub trait LossFunction<T>
where
    T: LossFloat,
{
    /// Loss for a single predicted/target pair.
    fn sample_loss(&self, predicted: T, target: T) -> T;

    /// Loss for one sample's predicted and target vectors.
    fn sample_loss_vec(&self, predicted: ArrayView1<'_, T>, target: ArrayView1<'_, T>) -> T;

    /// Subgradient of the loss for a single predicted/target pair.
    fn sample_loss_gradient(&self, predicted: T, target: T) -> T;

    /// Elementwise subgradient for one sample, as a freshly allocated vector.
    /// Neither input is mutated.
    fn sample_loss_gradient_vec(
        &self,
        predicted: ArrayView1<'_, T>,
        target: ArrayView1<'_, T>,
    ) -> Array1<T>;

    /// Mean per-sample loss across the rows of a batch.
    ///
    /// Returns NaN for a zero-row batch: the mean of an empty set is
    /// undefined, and a silent `0.0` would read as a perfect score.
    fn mean_loss(&self, predicted: ArrayView2<'_, T>, target: ArrayView2<'_, T>) -> T {
        let mut stats = RunningMean::new();
        for (p, t) in predicted.rows().into_iter().zip(target.rows()) {
            stats.push(self.sample_loss_vec(p, t));
        }
        stats.mean()
    }

    /// Per-sample subgradients stacked into a freshly allocated matrix with
    /// the shape of the inputs. Neither input is mutated.
    ///
    /// The provided implementation materializes the dense gradient row by
    /// row. A strategy that can exploit sparsity in its inputs may override
    /// this to touch only the active elements.
    fn loss_gradient(&self, predicted: ArrayView2<'_, T>, target: ArrayView2<'_, T>) -> Array2<T> {
        let mut gradient = Array2::zeros(predicted.raw_dim());
        for ((p, t), mut row) in predicted
            .rows()
            .into_iter()
            .zip(target.rows())
            .zip(gradient.rows_mut())
        {
            row.assign(&self.sample_loss_gradient_vec(p, t));
        }
        gradient
    }
}
