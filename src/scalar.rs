//! The [`Scalar`] trait for writing AD-generic numeric code.
//!
//! Functions written as `fn f<T: Scalar>(x: T) -> T` work transparently with plain
//! `f64` and with every `Dual<f64, G>`, whatever the gradient shape.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

use num_traits::FromPrimitive;

use crate::dual::Dual;
use crate::float::Float;
use crate::gradient::Gradient;

/// The central trait for AD-generic numeric code.
///
/// Besides the `num_traits::Float` surface it carries the functions that
/// `num_traits` does not know about (`erf`, the fast approximations) and
/// [`powc`](Scalar::powc), a power whose exponent is a plain constant.
pub trait Scalar:
    num_traits::Float
    + num_traits::FloatConst
    + FromPrimitive
    + Copy
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// The underlying primitive float type.
    type Float: Float;

    /// Lift a plain float to this scalar (constant, zero derivative).
    fn from_f(val: Self::Float) -> Self;

    /// Extract the primal value.
    fn value(&self) -> Self::Float;

    fn erf(self) -> Self;

    fn fast_exp(self) -> Self;

    fn fast_atan(self) -> Self;

    /// `self^c` for a constant exponent.
    fn powc(self, c: Self::Float) -> Self;
}

macro_rules! impl_scalar_for_float {
    ($f:ty) => {
        impl Scalar for $f {
            type Float = $f;

            #[inline]
            fn from_f(val: $f) -> Self {
                val
            }

            #[inline]
            fn value(&self) -> $f {
                *self
            }

            #[inline]
            fn erf(self) -> Self {
                <$f as Float>::erf(self)
            }

            #[inline]
            fn fast_exp(self) -> Self {
                <$f as Float>::fast_exp(self)
            }

            #[inline]
            fn fast_atan(self) -> Self {
                <$f as Float>::fast_atan(self)
            }

            #[inline]
            fn powc(self, c: $f) -> Self {
                <$f>::powf(self, c)
            }
        }
    };
}

impl_scalar_for_float!(f32);
impl_scalar_for_float!(f64);

impl<F: Float, G: Gradient<F>> Scalar for Dual<F, G> {
    type Float = F;

    #[inline]
    fn from_f(val: F) -> Self {
        Dual::constant(val)
    }

    #[inline]
    fn value(&self) -> F {
        self.val
    }

    #[inline]
    fn erf(self) -> Self {
        Dual::erf(self)
    }

    #[inline]
    fn fast_exp(self) -> Self {
        Dual::fast_exp(self)
    }

    #[inline]
    fn fast_atan(self) -> Self {
        Dual::fast_atan(self)
    }

    #[inline]
    fn powc(self, c: F) -> Self {
        Dual::powc(self, c)
    }
}

/// A [`Scalar`] over `f64` that also mixes with `f64` constants on the right.
///
/// Physics routines are written against this bound so the same source runs
/// with plain `f64` and with any `f64` dual.
pub trait RealScalar:
    Scalar<Float = f64>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
}

impl<T> RealScalar for T where
    T: Scalar<Float = f64>
        + Add<f64, Output = T>
        + Sub<f64, Output = T>
        + Mul<f64, Output = T>
        + Div<f64, Output = T>
{
}
