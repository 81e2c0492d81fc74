//! Forward-mode automatic differentiation on `Copy` dual numbers.
//!
//! A [`Dual`] pairs a value with its gradient. The gradient is either the
//! float itself (one partial derivative) or a [`GradArray`] holding several
//! partials indexed over a fixed range `[LO, LO + N - 1]`.
//!
//! ```
//! use microdual::{math, Dual64};
//!
//! let x = Dual64::variable(1.5);
//! let y = math::sin(x) * x;
//! assert_eq!(y.val, 1.5_f64.sin() * 1.5);
//! assert!((y.grad - (1.5_f64.cos() * 1.5 + 1.5_f64.sin())).abs() < 1e-15);
//! ```

pub mod approx_math;
pub mod dual;
pub mod float;
pub mod grad_array;
pub mod gradient;
pub mod math;
pub mod op;
pub mod scalar;
pub mod seed;
mod traits;

pub use dual::Dual;
pub use float::Float;
pub use grad_array::GradArray;
pub use gradient::Gradient;
pub use op::{BinaryOp, UnaryOp};
pub use scalar::{RealScalar, Scalar};
pub use seed::{derivative, seed, seed_array, value};

/// Type alias for forward-mode dual numbers over `f64`.
pub type Dual64 = Dual<f64>;
/// Type alias for forward-mode dual numbers over `f32`.
pub type Dual32 = Dual<f32>;
/// `f64` dual carrying the partials for slots `LO ..= LO + N - 1`.
pub type DualArray<const LO: i32, const N: usize> = Dual<f64, GradArray<f64, LO, N>>;
/// First-order dual; the only order the screening kernel needs.
pub type HigherOrderDual1<F> = Dual<F>;
