use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::float::Float;

/// What a dual number's gradient can be.
///
/// Implemented by the base float itself (a single partial derivative) and by
/// [`GradArray`](crate::GradArray) (a fixed set of partials). The dual layer
/// treats either one as a single arithmetic quantity: it adds, subtracts and
/// negates gradients, and scales them by values, but never looks inside.
pub trait Gradient<F: Float>:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<F, Output = Self>
    + Div<F, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign<F>
    + DivAssign<F>
{
    /// A gradient whose every component equals `s`.
    fn splat(s: F) -> Self;
}

impl<F: Float> Gradient<F> for F {
    #[inline]
    fn splat(s: F) -> Self {
        s
    }
}
