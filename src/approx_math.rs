//! Fast approximations of transcendental functions.
//!
//! Both trade accuracy for a handful of multiplies. The dual-number versions
//! ([`crate::Dual::fast_exp`], [`crate::Dual::fast_atan`]) propagate the exact
//! derivative of the function being approximated, not the derivative of the
//! approximation, so the gradient error is of the same order as the value error.

use num_traits::{Float, FloatConst, FromPrimitive};

/// Rajan et al. (2006) approximation of `atan` on `[-1, 1]`.
///
/// Maximum absolute error is about `1.5e-3` rad.
#[inline]
fn fast_atan_1<F: Float + FloatConst + FromPrimitive>(x: F) -> F {
    let a = F::from_f64(0.2447).unwrap();
    let b = F::from_f64(0.0663).unwrap();
    let ax = x.abs();
    F::FRAC_PI_4() * x - x * (ax - F::one()) * (a + b * ax)
}

/// Approximate `atan(x)` for any `x`.
///
/// Outside `[-1, 1]` the identity `atan(x) = ±π/2 − atan(1/x)` folds the
/// argument back into the range of [`fast_atan_1`].
#[inline]
pub fn fast_atan<F: Float + FloatConst + FromPrimitive>(x: F) -> F {
    let half_pi = F::FRAC_PI_2().copysign(x);
    if x.is_infinite() {
        return half_pi;
    }
    if x.abs() <= F::one() {
        return fast_atan_1(x);
    }
    half_pi - fast_atan_1(F::one() / x)
}

/// Approximate `exp(x)` as `(1 + x/1024)^1024`, computed by ten squarings.
///
/// Relative error grows like `x²/2048`, so this is only meant for moderate
/// arguments. Returns zero for `x ≤ −1024`, where the base would go negative.
#[inline]
pub fn fast_exp<F: Float + FromPrimitive>(x: F) -> F {
    let n = F::from_f64(1024.0).unwrap();
    if x <= -n {
        return F::zero();
    }
    let mut r = F::one() + x / n;
    for _ in 0..10 {
        r = r * r;
    }
    r
}
