use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive, NumAssign};

use crate::approx_math;

/// Marker trait for base floating-point types (`f32`, `f64`).
///
/// Bundles the numeric and utility traits needed throughout microdual, plus the
/// few math functions `num_traits::Float` does not provide.
/// Only primitive float types implement this — dual types do not.
pub trait Float:
    NumFloat
    + NumAssign
    + FloatConst
    + FromPrimitive
    + Copy
    + Send
    + Sync
    + Default
    + Debug
    + Display
    + 'static
{
    /// Gauss error function.
    fn erf(self) -> Self;

    /// Rational approximation of `atan`, see [`approx_math::fast_atan`].
    #[inline]
    fn fast_atan(self) -> Self {
        approx_math::fast_atan(self)
    }

    /// Limit approximation of `exp`, see [`approx_math::fast_exp`].
    #[inline]
    fn fast_exp(self) -> Self {
        approx_math::fast_exp(self)
    }
}

impl Float for f32 {
    #[inline]
    fn erf(self) -> Self {
        libm::erff(self)
    }
}

impl Float for f64 {
    #[inline]
    fn erf(self) -> Self {
        libm::erf(self)
    }
}
