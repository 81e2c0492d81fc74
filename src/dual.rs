use std::fmt::{self, Display};

use crate::float::Float;
use crate::grad_array::GradArray;
use crate::gradient::Gradient;
use crate::op::{self, BinaryOp, UnaryOp};

/// Forward-mode dual number: a value paired with its gradient.
///
/// `G` is either the float itself (one partial derivative) or a
/// [`GradArray`] (several partials computed in the same pass).
///
/// Every value is produced by the same IEEE operation the plain-float code
/// would perform, in the same order, so `val` never differs from an
/// evaluation with plain floats.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dual<F: Float, G: Gradient<F> = F> {
    /// Primal value.
    pub val: F,
    /// Partial derivative(s) of `val`.
    pub grad: G,
}

impl<F: Float, G: Gradient<F>> Display for Dual<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.val, self.grad)
    }
}

impl<F: Float, G: Gradient<F>> From<F> for Dual<F, G> {
    #[inline]
    fn from(val: F) -> Self {
        Dual::constant(val)
    }
}

impl<F: Float> Dual<F> {
    /// Create an independent variable (unit derivative).
    #[inline]
    pub fn variable(val: F) -> Self {
        Dual { val, grad: F::one() }
    }
}

impl<F: Float, const LO: i32, const N: usize> Dual<F, GradArray<F, LO, N>> {
    /// Create an independent variable owning gradient slot `slot`.
    #[inline]
    pub fn with_slot(val: F, slot: i32) -> Self {
        Dual {
            val,
            grad: GradArray::unit(slot),
        }
    }
}

impl<F: Float, G: Gradient<F>> Dual<F, G> {
    #[inline]
    pub fn new(val: F, grad: G) -> Self {
        Dual { val, grad }
    }

    /// Create a constant (zero gradient).
    #[inline]
    pub fn constant(val: F) -> Self {
        Dual {
            val,
            grad: G::splat(F::zero()),
        }
    }

    /// Apply a tagged unary operator: `val = f(u)`, `grad = f'(u)·grad`.
    #[inline]
    pub fn apply(self, op: UnaryOp<F>) -> Self {
        let val = op.eval(self.val);
        let deriv = op.derivative(self.val, val);
        self.chain(val, deriv)
    }

    /// Apply the chain rule: given `f(self.val)` and `f'(self.val)`, produce the dual result.
    #[inline(always)]
    fn chain(self, f_val: F, f_deriv: F) -> Self {
        Dual {
            val: f_val,
            grad: self.grad * f_deriv,
        }
    }

    #[inline(always)]
    fn has_zero_grad(&self) -> bool {
        self.grad == G::splat(F::zero())
    }

    // ── Powers ──

    #[inline]
    pub fn recip(self) -> Self {
        let inv = self.val.recip();
        self.chain(inv, -inv * inv)
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        self.apply(UnaryOp::Sqrt)
    }

    #[inline]
    pub fn cbrt(self) -> Self {
        self.apply(UnaryOp::Cbrt)
    }

    #[inline]
    pub fn powi(self, n: i32) -> Self {
        let val = self.val.powi(n);
        let deriv = F::from(n).unwrap() * self.val.powi(n - 1);
        self.chain(val, deriv)
    }

    /// Power with a constant exponent.
    #[inline]
    pub fn powc(self, c: F) -> Self {
        self.apply(UnaryOp::Pow(c))
    }

    /// Power with a dual exponent.
    ///
    /// `d(u^v) = v·u^(v-1)·du + u^v·ln(u)·dv`; the logarithmic term is skipped
    /// when `v` carries no gradient so that non-positive bases stay finite.
    #[inline]
    pub fn powf(self, n: Self) -> Self {
        let val = self.val.powf(n.val);
        let mut grad = self.grad * (n.val * self.val.powf(n.val - F::one()));
        if !n.has_zero_grad() {
            grad += n.grad * (val * self.val.ln());
        }
        Dual { val, grad }
    }

    // ── Exp/Log ──

    #[inline]
    pub fn exp(self) -> Self {
        self.apply(UnaryOp::Exp)
    }

    #[inline]
    pub fn fast_exp(self) -> Self {
        self.apply(UnaryOp::FastExp)
    }

    #[inline]
    pub fn exp2(self) -> Self {
        let e = self.val.exp2();
        self.chain(e, e * F::LN_2())
    }

    #[inline]
    pub fn exp_m1(self) -> Self {
        self.chain(self.val.exp_m1(), self.val.exp())
    }

    #[inline]
    pub fn ln(self) -> Self {
        self.apply(UnaryOp::Log)
    }

    #[inline]
    pub fn log2(self) -> Self {
        self.chain(self.val.log2(), F::one() / (self.val * F::LN_2()))
    }

    #[inline]
    pub fn log10(self) -> Self {
        self.chain(self.val.log10(), F::one() / (self.val * F::LN_10()))
    }

    #[inline]
    pub fn ln_1p(self) -> Self {
        self.apply(UnaryOp::Log1p)
    }

    #[inline]
    pub fn log(self, base: Self) -> Self {
        self.ln() / base.ln()
    }

    // ── Trig ──

    #[inline]
    pub fn sin(self) -> Self {
        self.apply(UnaryOp::Sin)
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.apply(UnaryOp::Cos)
    }

    #[inline]
    pub fn tan(self) -> Self {
        self.apply(UnaryOp::Tan)
    }

    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        let (s, c) = self.val.sin_cos();
        (self.chain(s, c), self.chain(c, -s))
    }

    #[inline]
    pub fn asin(self) -> Self {
        self.apply(UnaryOp::Asin)
    }

    #[inline]
    pub fn acos(self) -> Self {
        self.apply(UnaryOp::Acos)
    }

    #[inline]
    pub fn atan(self) -> Self {
        self.apply(UnaryOp::Atan)
    }

    #[inline]
    pub fn fast_atan(self) -> Self {
        self.apply(UnaryOp::FastAtan)
    }

    /// Four-quadrant arctangent of `self / other`.
    #[inline]
    pub fn atan2(self, other: Self) -> Self {
        // d atan2(y, x) = (x·dy - y·dx) / (x² + y²)
        let denom = self.val * self.val + other.val * other.val;
        Dual {
            val: BinaryOp::Atan2.eval(self.val, other.val),
            grad: (self.grad * other.val - other.grad * self.val) / denom,
        }
    }

    // ── Hyperbolic ──

    #[inline]
    pub fn sinh(self) -> Self {
        self.apply(UnaryOp::Sinh)
    }

    #[inline]
    pub fn cosh(self) -> Self {
        self.apply(UnaryOp::Cosh)
    }

    #[inline]
    pub fn tanh(self) -> Self {
        self.apply(UnaryOp::Tanh)
    }

    #[inline]
    pub fn asinh(self) -> Self {
        self.chain(
            self.val.asinh(),
            F::one() / (self.val * self.val + F::one()).sqrt(),
        )
    }

    #[inline]
    pub fn acosh(self) -> Self {
        self.chain(
            self.val.acosh(),
            F::one() / (self.val * self.val - F::one()).sqrt(),
        )
    }

    #[inline]
    pub fn atanh(self) -> Self {
        self.chain(self.val.atanh(), F::one() / (F::one() - self.val * self.val))
    }

    // ── Special ──

    #[inline]
    pub fn erf(self) -> Self {
        self.apply(UnaryOp::Erf)
    }

    // ── Misc ──

    #[inline]
    pub fn abs(self) -> Self {
        self.apply(UnaryOp::Abs)
    }

    #[inline]
    pub fn signum(self) -> Self {
        Dual::constant(self.val.signum())
    }

    #[inline]
    pub fn floor(self) -> Self {
        Dual::constant(self.val.floor())
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Dual::constant(self.val.ceil())
    }

    #[inline]
    pub fn round(self) -> Self {
        Dual::constant(self.val.round())
    }

    #[inline]
    pub fn trunc(self) -> Self {
        Dual::constant(self.val.trunc())
    }

    #[inline]
    pub fn fract(self) -> Self {
        Dual {
            val: self.val.fract(),
            grad: self.grad,
        }
    }

    /// `self * a + b` with the same fused value `F::mul_add` gives.
    #[inline]
    pub fn mul_add(self, a: Self, b: Self) -> Self {
        Dual {
            val: self.val.mul_add(a.val, b.val),
            grad: self.grad * a.val + a.grad * self.val + b.grad,
        }
    }

    #[inline]
    pub fn hypot(self, other: Self) -> Self {
        let h = BinaryOp::Hypot.eval(self.val, other.val);
        Dual {
            val: h,
            grad: (self.grad * self.val + other.grad * other.val) / h,
        }
    }

    /// Larger operand, gradient included.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        op::select_max(self, other)
    }

    /// Smaller operand, gradient included.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        op::select_min(self, other)
    }
}
