//! Operator tags and their chain-rule table.
//!
//! Every elementary function a [`Dual`](crate::Dual) supports is named here.
//! [`UnaryOp::eval`] computes the value with exactly the plain-float routine,
//! and [`UnaryOp::derivative`] gives the factor `f'(u)` the gradient is
//! scaled by. Binary operators have their value rule in [`BinaryOp::eval`];
//! their gradient rules live with the operator impls because they combine two
//! gradients.

use crate::float::Float;

/// Unary operator tags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnaryOp<F> {
    Neg,
    Log,
    Log1p,
    Exp,
    /// Approximate exponential, see [`crate::approx_math::fast_exp`].
    FastExp,
    /// Power with a constant exponent.
    Pow(F),
    Sqrt,
    Cbrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// Approximate arctangent, see [`crate::approx_math::fast_atan`].
    FastAtan,
    Sinh,
    Cosh,
    Tanh,
    Erf,
    /// Kink at zero; the derivative there is taken as zero.
    Abs,
}

/// Binary operator tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Atan2,
    Hypot,
}

impl<F: Float> UnaryOp<F> {
    /// Evaluate the operator on a plain value.
    #[inline]
    pub fn eval(self, u: F) -> F {
        match self {
            UnaryOp::Neg => -u,
            UnaryOp::Log => u.ln(),
            UnaryOp::Log1p => u.ln_1p(),
            UnaryOp::Exp => u.exp(),
            UnaryOp::FastExp => u.fast_exp(),
            UnaryOp::Pow(c) => u.powf(c),
            UnaryOp::Sqrt => u.sqrt(),
            UnaryOp::Cbrt => u.cbrt(),
            UnaryOp::Sin => u.sin(),
            UnaryOp::Cos => u.cos(),
            UnaryOp::Tan => u.tan(),
            UnaryOp::Asin => u.asin(),
            UnaryOp::Acos => u.acos(),
            UnaryOp::Atan => u.atan(),
            UnaryOp::FastAtan => u.fast_atan(),
            UnaryOp::Sinh => u.sinh(),
            UnaryOp::Cosh => u.cosh(),
            UnaryOp::Tanh => u.tanh(),
            UnaryOp::Erf => u.erf(),
            UnaryOp::Abs => u.abs(),
        }
    }

    /// Derivative `f'(u)`, given the operand `u` and the already computed
    /// result `r = f(u)`.
    ///
    /// The fast variants use the derivative of the exact function (`exp`,
    /// `atan`), evaluated through the approximated result where it appears.
    #[inline]
    pub fn derivative(self, u: F, r: F) -> F {
        let one = F::one();
        match self {
            UnaryOp::Neg => -one,
            UnaryOp::Log => one / u,
            UnaryOp::Log1p => one / (one + u),
            UnaryOp::Exp | UnaryOp::FastExp => r,
            UnaryOp::Pow(c) => c * u.powf(c - one),
            UnaryOp::Sqrt => one / ((one + one) * r),
            UnaryOp::Cbrt => one / (F::from_f64(3.0).unwrap() * r * r),
            UnaryOp::Sin => u.cos(),
            UnaryOp::Cos => -u.sin(),
            UnaryOp::Tan => {
                let c = u.cos();
                one / (c * c)
            }
            UnaryOp::Asin => one / (one - u * u).sqrt(),
            UnaryOp::Acos => -one / (one - u * u).sqrt(),
            UnaryOp::Atan | UnaryOp::FastAtan => one / (one + u * u),
            UnaryOp::Sinh => u.cosh(),
            UnaryOp::Cosh => u.sinh(),
            UnaryOp::Tanh => {
                let c = u.cosh();
                one / (c * c)
            }
            UnaryOp::Erf => F::FRAC_2_SQRT_PI() * (-u * u).exp(),
            UnaryOp::Abs => {
                if u > F::zero() {
                    one
                } else if u < F::zero() {
                    -one
                } else {
                    F::zero()
                }
            }
        }
    }
}

impl BinaryOp {
    /// Evaluate the operator on plain values.
    #[inline]
    pub fn eval<F: Float>(self, a: F, b: F) -> F {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Atan2 => a.atan2(b),
            BinaryOp::Hypot => a.hypot(b),
        }
    }
}

/// `a` unless `b` is strictly smaller. Shared by plain and dual `min` so both
/// pick the same operand, NaN included.
#[inline]
pub fn select_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// `a` unless `b` is strictly larger.
#[inline]
pub fn select_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_derivative_is_zero_at_kink() {
        assert_eq!(UnaryOp::<f64>::Abs.derivative(0.0, 0.0), 0.0);
        assert_eq!(UnaryOp::<f64>::Abs.derivative(-2.0, 2.0), -1.0);
        assert_eq!(UnaryOp::<f64>::Abs.derivative(2.0, 2.0), 1.0);
    }

    #[test]
    fn eval_matches_std() {
        let u = 0.3_f64;
        assert_eq!(UnaryOp::Log1p.eval(u), u.ln_1p());
        assert_eq!(UnaryOp::Pow(2.5).eval(u), u.powf(2.5));
        assert_eq!(BinaryOp::Div.eval(u, 7.0), u / 7.0);
        assert_eq!(select_min(u, -1.0), -1.0);
        assert_eq!(select_max(u, -1.0), u);
    }

    #[test]
    fn dual_binary_values_come_from_eval() {
        let y = crate::Dual64::variable(0.7);
        let x = crate::Dual64::constant(-1.3);
        assert_eq!(y.atan2(x).val, BinaryOp::Atan2.eval(0.7, -1.3));
        assert_eq!(y.hypot(x).val, BinaryOp::Hypot.eval(0.7, -1.3));
    }
}
