//! # Lossgrad
//!
//! Lossgrad computes loss values and (sub)gradients between predicted and
//! target values for machine-learning training loops, backed by `ndarray`.
//!
//! ## Features
//!
//! - Scalar, per-sample vector, and batched matrix granularity
//! - Interchangeable strategies behind a single [`LossFunction`] trait
//! - Linear (L1 / absolute error) and quadratic (squared error) variants
//! - Subgradient convention for the L1 kink: zero at a zero difference
//! - Streaming batch means, with an explicit NaN for empty batches
//! - Written 100% in safe Rust
//!
pub mod losses;
pub mod numeric;
pub mod stats;

// Re-export commonly used types for convenience
pub use losses::{LinearLoss, LossFunction, QuadraticLoss};
pub use numeric::LossFloat;
pub use stats::RunningMean;
