// src/numeric.rs

use ndarray::NdFloat;

/// Floating-point element type for loss computations.
///
/// Extends `ndarray::NdFloat` (elementwise arithmetic, scalar broadcasting,
/// the usual comparison and formatting traits, `abs`, `zero`, NaN) with the
/// few operations the loss strategies need on bare elements. Implemented
/// for `f32` and `f64`.
pub trait LossFloat: NdFloat {
    /// Three-way sign: `-1` if negative, `0` if zero, `+1` if positive.
    ///
    /// This is the subgradient of the absolute value, with the
    /// non-differentiable point at zero conventionally fixed to `0`.
    /// NaN propagates. Note that `f64::signum` cannot express this
    /// convention: it maps `0.0` to `1.0`.
    fn sign(self) -> Self;

    /// Conversion from a sample count, for mean division
    fn from_usize(value: usize) -> Self;

    /// Lossy conversion from `f64`, for constants
    fn from_f64(value: f64) -> Self;
}

impl LossFloat for f64 {
    fn sign(self) -> Self {
        if self.is_nan() {
            self
        } else if self > 0.0 {
            1.0
        } else if self < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    fn from_usize(value: usize) -> Self {
        value as f64
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl LossFloat for f32 {
    fn sign(self) -> Self {
        if self.is_nan() {
            self
        } else if self > 0.0 {
            1.0
        } else if self < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    fn from_usize(value: usize) -> Self {
        value as f32
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

#[cfg(test)]
mod tests {
    use super::LossFloat;

    #[test]
    fn test_sign_three_way_split() {
        assert_eq!(LossFloat::sign(2.5f64), 1.0);
        assert_eq!(LossFloat::sign(-0.001f64), -1.0);
        assert_eq!(LossFloat::sign(0.0f64), 0.0);
        // Negative zero is still zero
        assert_eq!(LossFloat::sign(-0.0f64), 0.0);
    }

    #[test]
    fn test_sign_differs_from_std_signum_at_zero() {
        // std maps 0.0 to 1.0, which would be the wrong subgradient
        assert_eq!(0.0f64.signum(), 1.0);
        assert_eq!(LossFloat::sign(0.0f64), 0.0);
    }

    #[test]
    fn test_sign_propagates_non_finite() {
        assert!(LossFloat::sign(f64::NAN).is_nan());
        assert_eq!(LossFloat::sign(f64::INFINITY), 1.0);
        assert_eq!(LossFloat::sign(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn test_float_items_resolve_through_loss_float_bound() {
        // zero, NaN, and abs come from the NdFloat supertrait chain and must
        // stay callable unqualified on a generic LossFloat element
        fn deviation_from_zero<T: LossFloat>(x: T) -> T {
            (x - T::zero()).abs()
        }
        fn undefined<T: LossFloat>() -> T {
            T::nan()
        }

        assert_eq!(deviation_from_zero(-3.0f64), 3.0);
        assert_eq!(deviation_from_zero(2.5f32), 2.5);
        assert!(undefined::<f64>().is_nan());
    }

    #[test]
    fn test_sign_f32() {
        assert_eq!(LossFloat::sign(3.0f32), 1.0);
        assert_eq!(LossFloat::sign(-3.0f32), -1.0);
        assert_eq!(LossFloat::sign(0.0f32), 0.0);
        assert!(LossFloat::sign(f32::NAN).is_nan());
    }
}
