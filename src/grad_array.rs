//! Fixed-size gradient container indexed over an arbitrary integer range.
//!
//! [`GradArray<F, LO, N>`] holds `N` partial derivatives addressed by the
//! inclusive index range `[LO, LO + N - 1]`, so a network that numbers its
//! inputs from 1 can keep doing so. It never allocates.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use crate::float::Float;
use crate::gradient::Gradient;

/// Gradient container with `N` components indexed from `LO`.
///
/// All arithmetic is componentwise and returns fresh values, so there are no
/// aliasing concerns.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct GradArray<F: Float, const LO: i32, const N: usize> {
    pub(crate) arr: [F; N],
}

impl<F: Float, const LO: i32, const N: usize> Default for GradArray<F, LO, N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Float, const LO: i32, const N: usize> Display for GradArray<F, LO, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.arr.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

impl<F: Float, const LO: i32, const N: usize> From<[F; N]> for GradArray<F, LO, N> {
    #[inline]
    fn from(arr: [F; N]) -> Self {
        GradArray { arr }
    }
}

impl<F: Float, const LO: i32, const N: usize> From<GradArray<F, LO, N>> for [F; N] {
    #[inline]
    fn from(g: GradArray<F, LO, N>) -> Self {
        g.arr
    }
}

impl<F: Float, const LO: i32, const N: usize> GradArray<F, LO, N> {
    /// All components zero.
    #[inline]
    pub fn zero() -> Self {
        GradArray {
            arr: [F::zero(); N],
        }
    }

    /// All components equal to `s`.
    #[inline]
    pub fn splat(s: F) -> Self {
        GradArray { arr: [s; N] }
    }

    #[inline]
    pub fn from_array(arr: [F; N]) -> Self {
        GradArray { arr }
    }

    /// Unit vector: one in `slot`, zero elsewhere.
    ///
    /// # Panics
    /// If `slot` is outside `[LO, HI]`.
    #[inline]
    pub fn unit(slot: i32) -> Self {
        let mut g = Self::zero();
        g[slot] = F::one();
        g
    }

    /// Lowest valid index.
    #[inline]
    pub const fn lo() -> i32 {
        LO
    }

    /// Highest valid index.
    #[inline]
    pub const fn hi() -> i32 {
        (LO as i64 + N as i64 - 1) as i32
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.arr.iter()
    }

    #[inline]
    pub fn as_array(&self) -> &[F; N] {
        &self.arr
    }

    /// Unpack into a plain array, e.g. `let [dfdx, dfdy] = g.into_array();`.
    #[inline]
    pub fn into_array(self) -> [F; N] {
        self.arr
    }

    /// Component at position `I` (counted from zero, not from `LO`).
    ///
    /// An out-of-range `I` is rejected at compile time.
    #[inline]
    pub fn get<const I: usize>(&self) -> F {
        const { assert!(I < N, "GradArray::get index out of range") };
        self.arr[I]
    }

    #[inline(always)]
    fn offset(i: i32) -> usize {
        let k = i as i64 - LO as i64;
        assert!(
            k >= 0 && (k as u64) < N as u64,
            "index {} outside [{}, {}]",
            i,
            LO,
            Self::hi()
        );
        k as usize
    }
}

impl<F: Float, const LO: i32, const N: usize> Index<i32> for GradArray<F, LO, N> {
    type Output = F;
    #[inline]
    fn index(&self, i: i32) -> &F {
        &self.arr[Self::offset(i)]
    }
}

impl<F: Float, const LO: i32, const N: usize> IndexMut<i32> for GradArray<F, LO, N> {
    #[inline]
    fn index_mut(&mut self, i: i32) -> &mut F {
        &mut self.arr[Self::offset(i)]
    }
}

impl<F: Float, const LO: i32, const N: usize> Gradient<F> for GradArray<F, LO, N> {
    #[inline]
    fn splat(s: F) -> Self {
        GradArray::splat(s)
    }
}
