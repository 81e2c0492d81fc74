use std::num::FpCategory;

use num_traits::{
    Float as NumFloat, FloatConst, FromPrimitive, Num, NumCast, One, Signed, ToPrimitive, Zero,
};

use crate::dual::Dual;
use crate::float::Float;
use crate::gradient::Gradient;

// Constants lift to zero-gradient duals.
macro_rules! lift_constants {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name() -> Self {
                Dual::constant(F::$name())
            }
        )*
    };
}

// Predicates and decompositions look at the value only.
macro_rules! forward_to_value {
    ($($name:ident -> $ret:ty),* $(,)?) => {
        $(
            #[inline]
            fn $name(self) -> $ret {
                self.val.$name()
            }
        )*
    };
}

// Unary elementals defer to the inherent `Dual` methods.
macro_rules! forward_unary {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            fn $name(self) -> Self {
                Dual::$name(self)
            }
        )*
    };
}

impl<F: Float, G: Gradient<F>> Zero for Dual<F, G> {
    #[inline]
    fn zero() -> Self {
        Dual::constant(F::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.val.is_zero()
    }
}

impl<F: Float, G: Gradient<F>> One for Dual<F, G> {
    #[inline]
    fn one() -> Self {
        Dual::constant(F::one())
    }
}

impl<F: Float, G: Gradient<F>> Num for Dual<F, G> {
    type FromStrRadixErr = F::FromStrRadixErr;
    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        F::from_str_radix(str, radix).map(Dual::constant)
    }
}

impl<F: Float, G: Gradient<F>> FromPrimitive for Dual<F, G> {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        F::from_i64(n).map(Dual::constant)
    }
    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        F::from_u64(n).map(Dual::constant)
    }
    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        F::from_f64(n).map(Dual::constant)
    }
}

impl<F: Float, G: Gradient<F>> ToPrimitive for Dual<F, G> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.val.to_i64()
    }
    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.val.to_u64()
    }
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.val.to_f64()
    }
}

impl<F: Float, G: Gradient<F>> NumCast for Dual<F, G> {
    #[inline]
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        <F as NumCast>::from(n).map(Dual::constant)
    }
}

impl<F: Float, G: Gradient<F>> Signed for Dual<F, G> {
    #[inline]
    fn abs(&self) -> Self {
        Dual::abs(*self)
    }
    #[inline]
    fn abs_sub(&self, other: &Self) -> Self {
        if self.val > other.val {
            *self - *other
        } else {
            Self::zero()
        }
    }
    #[inline]
    fn signum(&self) -> Self {
        Dual::signum(*self)
    }
    #[inline]
    fn is_positive(&self) -> bool {
        self.val > F::zero()
    }
    #[inline]
    fn is_negative(&self) -> bool {
        self.val < F::zero()
    }
}

#[allow(non_snake_case)]
impl<F: Float, G: Gradient<F>> FloatConst for Dual<F, G> {
    lift_constants!(
        E, FRAC_1_PI, FRAC_1_SQRT_2, FRAC_2_PI, FRAC_2_SQRT_PI, FRAC_PI_2, FRAC_PI_3,
        FRAC_PI_4, FRAC_PI_6, FRAC_PI_8, LN_10, LN_2, LOG10_E, LOG2_E, PI, SQRT_2, TAU,
        LOG10_2, LOG2_10,
    );
}

impl<F: Float, G: Gradient<F>> NumFloat for Dual<F, G> {
    lift_constants!(
        nan, infinity, neg_infinity, neg_zero, min_value, min_positive_value, max_value,
        epsilon,
    );

    forward_to_value!(
        is_nan -> bool,
        is_infinite -> bool,
        is_finite -> bool,
        is_normal -> bool,
        is_sign_positive -> bool,
        is_sign_negative -> bool,
        classify -> FpCategory,
        integer_decode -> (u64, i16, i8),
    );

    forward_unary!(
        floor, ceil, round, trunc, fract, abs, signum, recip, sqrt, cbrt, exp, exp2, exp_m1,
        ln, log2, log10, ln_1p, sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh,
        acosh, atanh,
    );

    fn mul_add(self, a: Self, b: Self) -> Self {
        Dual::mul_add(self, a, b)
    }
    fn powi(self, n: i32) -> Self {
        Dual::powi(self, n)
    }
    fn powf(self, n: Self) -> Self {
        Dual::powf(self, n)
    }
    fn log(self, base: Self) -> Self {
        Dual::log(self, base)
    }
    fn sin_cos(self) -> (Self, Self) {
        Dual::sin_cos(self)
    }
    fn atan2(self, other: Self) -> Self {
        Dual::atan2(self, other)
    }
    fn hypot(self, other: Self) -> Self {
        Dual::hypot(self, other)
    }
    fn max(self, other: Self) -> Self {
        Dual::max(self, other)
    }
    fn min(self, other: Self) -> Self {
        Dual::min(self, other)
    }

    fn abs_sub(self, other: Self) -> Self {
        <Self as Signed>::abs_sub(&self, &other)
    }

    fn to_degrees(self) -> Self {
        let factor = F::from(180.0).unwrap() / F::PI();
        Dual::new(self.val.to_degrees(), self.grad * factor)
    }

    fn to_radians(self) -> Self {
        let factor = F::PI() / F::from(180.0).unwrap();
        Dual::new(self.val.to_radians(), self.grad * factor)
    }
}
