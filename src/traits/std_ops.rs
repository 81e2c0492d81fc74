use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::dual::Dual;
use crate::float::Float;
use crate::gradient::Gradient;
use crate::op::BinaryOp;

// ──────────────────────────────────────────────
//  Dual<F, G> operators
// ──────────────────────────────────────────────

impl<F: Float, G: Gradient<F>> Add for Dual<F, G> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Dual {
            val: BinaryOp::Add.eval(self.val, rhs.val),
            grad: self.grad + rhs.grad,
        }
    }
}

impl<F: Float, G: Gradient<F>> Sub for Dual<F, G> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Dual {
            val: BinaryOp::Sub.eval(self.val, rhs.val),
            grad: self.grad - rhs.grad,
        }
    }
}

impl<F: Float, G: Gradient<F>> Mul for Dual<F, G> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        // u·v' + v·u'
        Dual {
            val: BinaryOp::Mul.eval(self.val, rhs.val),
            grad: rhs.grad * self.val + self.grad * rhs.val,
        }
    }
}

impl<F: Float, G: Gradient<F>> Div for Dual<F, G> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        // (u' - (u/v)·v') / v
        let val = BinaryOp::Div.eval(self.val, rhs.val);
        Dual {
            val,
            grad: (self.grad - rhs.grad * val) / rhs.val,
        }
    }
}

impl<F: Float, G: Gradient<F>> Neg for Dual<F, G> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Dual {
            val: -self.val,
            grad: -self.grad,
        }
    }
}

impl<F: Float, G: Gradient<F>> Rem for Dual<F, G> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        // u % v = u - trunc(u/v)·v
        Dual {
            val: self.val % rhs.val,
            grad: self.grad - rhs.grad * (self.val / rhs.val).trunc(),
        }
    }
}

impl<F: Float, G: Gradient<F>> AddAssign for Dual<F, G> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float, G: Gradient<F>> SubAssign for Dual<F, G> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float, G: Gradient<F>> MulAssign for Dual<F, G> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float, G: Gradient<F>> DivAssign for Dual<F, G> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<F: Float, G: Gradient<F>> RemAssign for Dual<F, G> {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// Mixed ops: Dual<F, G> with primitive floats, for any gradient shape.
// We generate these for f32 and f64 via a macro.
macro_rules! impl_dual_scalar_ops {
    ($f:ty) => {
        impl<G: Gradient<$f>> Add<$f> for Dual<$f, G> {
            type Output = Dual<$f, G>;
            #[inline]
            fn add(self, rhs: $f) -> Dual<$f, G> {
                Dual {
                    val: self.val + rhs,
                    grad: self.grad,
                }
            }
        }

        impl<G: Gradient<$f>> Add<Dual<$f, G>> for $f {
            type Output = Dual<$f, G>;
            #[inline]
            fn add(self, rhs: Dual<$f, G>) -> Dual<$f, G> {
                Dual {
                    val: self + rhs.val,
                    grad: rhs.grad,
                }
            }
        }

        impl<G: Gradient<$f>> Sub<$f> for Dual<$f, G> {
            type Output = Dual<$f, G>;
            #[inline]
            fn sub(self, rhs: $f) -> Dual<$f, G> {
                Dual {
                    val: self.val - rhs,
                    grad: self.grad,
                }
            }
        }

        impl<G: Gradient<$f>> Sub<Dual<$f, G>> for $f {
            type Output = Dual<$f, G>;
            #[inline]
            fn sub(self, rhs: Dual<$f, G>) -> Dual<$f, G> {
                Dual {
                    val: self - rhs.val,
                    grad: -rhs.grad,
                }
            }
        }

        impl<G: Gradient<$f>> Mul<$f> for Dual<$f, G> {
            type Output = Dual<$f, G>;
            #[inline]
            fn mul(self, rhs: $f) -> Dual<$f, G> {
                Dual {
                    val: self.val * rhs,
                    grad: self.grad * rhs,
                }
            }
        }

        impl<G: Gradient<$f>> Mul<Dual<$f, G>> for $f {
            type Output = Dual<$f, G>;
            #[inline]
            fn mul(self, rhs: Dual<$f, G>) -> Dual<$f, G> {
                Dual {
                    val: self * rhs.val,
                    grad: rhs.grad * self,
                }
            }
        }

        impl<G: Gradient<$f>> Div<$f> for Dual<$f, G> {
            type Output = Dual<$f, G>;
            #[inline]
            fn div(self, rhs: $f) -> Dual<$f, G> {
                Dual {
                    val: self.val / rhs,
                    grad: self.grad / rhs,
                }
            }
        }

        impl<G: Gradient<$f>> Div<Dual<$f, G>> for $f {
            type Output = Dual<$f, G>;
            #[inline]
            fn div(self, rhs: Dual<$f, G>) -> Dual<$f, G> {
                let val = self / rhs.val;
                Dual {
                    val,
                    grad: -(rhs.grad * val) / rhs.val,
                }
            }
        }

        impl<G: Gradient<$f>> Rem<$f> for Dual<$f, G> {
            type Output = Dual<$f, G>;
            #[inline]
            fn rem(self, rhs: $f) -> Dual<$f, G> {
                Dual {
                    val: self.val % rhs,
                    grad: self.grad,
                }
            }
        }

        impl<G: Gradient<$f>> Rem<Dual<$f, G>> for $f {
            type Output = Dual<$f, G>;
            #[inline]
            fn rem(self, rhs: Dual<$f, G>) -> Dual<$f, G> {
                Dual {
                    val: self % rhs.val,
                    grad: -(rhs.grad * (self / rhs.val).trunc()),
                }
            }
        }

        impl<G: Gradient<$f>> AddAssign<$f> for Dual<$f, G> {
            #[inline]
            fn add_assign(&mut self, rhs: $f) {
                *self = *self + rhs;
            }
        }

        impl<G: Gradient<$f>> SubAssign<$f> for Dual<$f, G> {
            #[inline]
            fn sub_assign(&mut self, rhs: $f) {
                *self = *self - rhs;
            }
        }

        impl<G: Gradient<$f>> MulAssign<$f> for Dual<$f, G> {
            #[inline]
            fn mul_assign(&mut self, rhs: $f) {
                *self = *self * rhs;
            }
        }

        impl<G: Gradient<$f>> DivAssign<$f> for Dual<$f, G> {
            #[inline]
            fn div_assign(&mut self, rhs: $f) {
                *self = *self / rhs;
            }
        }
    };
}

impl_dual_scalar_ops!(f32);
impl_dual_scalar_ops!(f64);

impl<F: Float, G: Gradient<F>> PartialEq for Dual<F, G> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.val == other.val
    }
}

impl<F: Float, G: Gradient<F>> PartialOrd for Dual<F, G> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.val.partial_cmp(&other.val)
    }
}

impl<F: Float, G: Gradient<F>> std::iter::Sum for Dual<F, G> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Dual::constant(F::zero()), |acc, x| acc + x)
    }
}
