//! One name per math function for every scalar type.
//!
//! Code written against these functions runs unchanged with plain floats
//! (no differentiation) and with duals (chain rule applied). Import the module
//! rather than the functions when a local name would shadow them:
//!
//! ```
//! use microdual::{math, Dual64};
//!
//! fn arrhenius<T: microdual::RealScalar>(t: T) -> T {
//!     math::exp(-T::from_f(3.0) / t)
//! }
//!
//! let plain = arrhenius(2.0_f64);
//! let dual = arrhenius(Dual64::variable(2.0));
//! assert_eq!(plain, dual.val);
//! ```

use crate::op;
use crate::scalar::Scalar;

macro_rules! unary {
    ($($(#[$m:meta])* $name:ident => $method:ident),* $(,)?) => {
        $(
            $(#[$m])*
            #[inline]
            pub fn $name<T: Scalar>(x: T) -> T {
                x.$method()
            }
        )*
    };
}

unary! {
    abs => abs,
    acos => acos,
    asin => asin,
    atan => atan,
    cos => cos,
    exp => exp,
    /// Natural logarithm.
    log => ln,
    log10 => log10,
    sin => sin,
    sqrt => sqrt,
    tan => tan,
    cosh => cosh,
    sinh => sinh,
    tanh => tanh,
    /// `ln(1 + x)`.
    log1p => ln_1p,
    cbrt => cbrt,
}

#[inline]
pub fn erf<T: Scalar>(x: T) -> T {
    Scalar::erf(x)
}

/// Approximate `atan`; see [`crate::approx_math::fast_atan`].
#[inline]
pub fn fast_atan<T: Scalar>(x: T) -> T {
    Scalar::fast_atan(x)
}

/// Approximate `exp`; see [`crate::approx_math::fast_exp`].
#[inline]
pub fn fast_exp<T: Scalar>(x: T) -> T {
    Scalar::fast_exp(x)
}

/// `x^c` with a constant exponent.
#[inline]
pub fn pow<T: Scalar>(x: T, c: T::Float) -> T {
    x.powc(c)
}

/// `x^y` with both operands variable.
#[inline]
pub fn powf<T: Scalar>(x: T, y: T) -> T {
    num_traits::Float::powf(x, y)
}

#[inline]
pub fn atan2<T: Scalar>(y: T, x: T) -> T {
    y.atan2(x)
}

#[inline]
pub fn hypot<T: Scalar>(x: T, y: T) -> T {
    x.hypot(y)
}

/// The smaller operand; `x` on ties and when either is NaN.
#[inline]
pub fn min<T: Scalar>(x: T, y: T) -> T {
    op::select_min(x, y)
}

/// The larger operand; `x` on ties and when either is NaN.
#[inline]
pub fn max<T: Scalar>(x: T, y: T) -> T {
    op::select_max(x, y)
}
