//! Marking independent variables and reading results back.

use crate::dual::Dual;
use crate::float::Float;
use crate::grad_array::GradArray;
use crate::gradient::Gradient;
use crate::scalar::Scalar;

/// Make `x` the differentiation variable of a scalar-gradient pass.
#[inline]
pub fn seed<F: Float>(x: &mut Dual<F>) {
    x.grad = F::one();
}

/// Seed all `N` independent variables of an array-gradient pass at once.
///
/// The `k`-th argument receives the unit vector of slot `LO + k`. The
/// argument count must equal the gradient length, which the array type
/// checks at compile time:
///
/// ```
/// use microdual::{seed_array, DualArray};
///
/// let mut x = DualArray::<1, 2>::constant(2.0);
/// let mut y = DualArray::<1, 2>::constant(3.0);
/// seed_array([&mut x, &mut y]);
/// let z = x * y;
/// assert_eq!(z.grad.into_array(), [3.0, 2.0]);
/// ```
///
/// ```compile_fail
/// use microdual::{seed_array, DualArray};
///
/// let mut x = DualArray::<1, 3>::constant(2.0);
/// let mut y = DualArray::<1, 3>::constant(3.0);
/// seed_array([&mut x, &mut y]);
/// ```
pub fn seed_array<F: Float, const LO: i32, const N: usize>(
    vars: [&mut Dual<F, GradArray<F, LO, N>>; N],
) {
    for (k, x) in vars.into_iter().enumerate() {
        x.grad = GradArray::unit(LO + k as i32);
    }
}

/// The gradient carried by `x`.
#[inline]
pub fn derivative<F: Float, G: Gradient<F>>(x: &Dual<F, G>) -> G {
    x.grad
}

/// The primal value of any scalar.
#[inline]
pub fn value<T: Scalar>(x: &T) -> T::Float {
    x.value()
}
