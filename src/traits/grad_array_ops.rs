use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::float::Float;
use crate::grad_array::GradArray;

// ── Compound assignment ──

impl<F: Float, const LO: i32, const N: usize> AddAssign for GradArray<F, LO, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.arr.iter_mut().zip(rhs.arr) {
            *a += b;
        }
    }
}

impl<F: Float, const LO: i32, const N: usize> SubAssign for GradArray<F, LO, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.arr.iter_mut().zip(rhs.arr) {
            *a -= b;
        }
    }
}

impl<F: Float, const LO: i32, const N: usize> MulAssign for GradArray<F, LO, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        for (a, b) in self.arr.iter_mut().zip(rhs.arr) {
            *a *= b;
        }
    }
}

impl<F: Float, const LO: i32, const N: usize> DivAssign for GradArray<F, LO, N> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        for (a, b) in self.arr.iter_mut().zip(rhs.arr) {
            *a /= b;
        }
    }
}

impl<F: Float, const LO: i32, const N: usize> MulAssign<F> for GradArray<F, LO, N> {
    #[inline]
    fn mul_assign(&mut self, s: F) {
        for a in self.arr.iter_mut() {
            *a *= s;
        }
    }
}

impl<F: Float, const LO: i32, const N: usize> DivAssign<F> for GradArray<F, LO, N> {
    #[inline]
    fn div_assign(&mut self, s: F) {
        for a in self.arr.iter_mut() {
            *a /= s;
        }
    }
}

// ── Unary ──

impl<F: Float, const LO: i32, const N: usize> Neg for GradArray<F, LO, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        GradArray {
            arr: self.arr.map(|a| -a),
        }
    }
}

// ── GradArray @ GradArray ──

impl<F: Float, const LO: i32, const N: usize> Add for GradArray<F, LO, N> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<F: Float, const LO: i32, const N: usize> Sub for GradArray<F, LO, N> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<F: Float, const LO: i32, const N: usize> Mul for GradArray<F, LO, N> {
    type Output = Self;
    #[inline]
    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl<F: Float, const LO: i32, const N: usize> Div for GradArray<F, LO, N> {
    type Output = Self;
    #[inline]
    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

// ── GradArray @ scalar ──

impl<F: Float, const LO: i32, const N: usize> Add<F> for GradArray<F, LO, N> {
    type Output = Self;
    #[inline]
    fn add(self, s: F) -> Self {
        self + GradArray::splat(s)
    }
}

impl<F: Float, const LO: i32, const N: usize> Sub<F> for GradArray<F, LO, N> {
    type Output = Self;
    #[inline]
    fn sub(self, s: F) -> Self {
        self - GradArray::splat(s)
    }
}

impl<F: Float, const LO: i32, const N: usize> Mul<F> for GradArray<F, LO, N> {
    type Output = Self;
    #[inline]
    fn mul(mut self, s: F) -> Self {
        self *= s;
        self
    }
}

impl<F: Float, const LO: i32, const N: usize> Div<F> for GradArray<F, LO, N> {
    type Output = Self;
    #[inline]
    fn div(mut self, s: F) -> Self {
        self /= s;
        self
    }
}

// ── scalar @ GradArray ──
// Broadcast the scalar and combine componentwise, so `s / g` is `[s / g_i]`.
macro_rules! impl_scalar_grad_array_ops {
    ($f:ty) => {
        impl<const LO: i32, const N: usize> Add<GradArray<$f, LO, N>> for $f {
            type Output = GradArray<$f, LO, N>;
            #[inline]
            fn add(self, rhs: GradArray<$f, LO, N>) -> GradArray<$f, LO, N> {
                GradArray::splat(self) + rhs
            }
        }

        impl<const LO: i32, const N: usize> Sub<GradArray<$f, LO, N>> for $f {
            type Output = GradArray<$f, LO, N>;
            #[inline]
            fn sub(self, rhs: GradArray<$f, LO, N>) -> GradArray<$f, LO, N> {
                GradArray::splat(self) - rhs
            }
        }

        impl<const LO: i32, const N: usize> Mul<GradArray<$f, LO, N>> for $f {
            type Output = GradArray<$f, LO, N>;
            #[inline]
            fn mul(self, rhs: GradArray<$f, LO, N>) -> GradArray<$f, LO, N> {
                GradArray::splat(self) * rhs
            }
        }

        impl<const LO: i32, const N: usize> Div<GradArray<$f, LO, N>> for $f {
            type Output = GradArray<$f, LO, N>;
            #[inline]
            fn div(self, rhs: GradArray<$f, LO, N>) -> GradArray<$f, LO, N> {
                GradArray::splat(self) / rhs
            }
        }
    };
}

impl_scalar_grad_array_ops!(f32);
impl_scalar_grad_array_ops!(f64);
