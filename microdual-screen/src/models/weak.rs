use microdual::{math, RealScalar};

use super::ScreeningModel;
use crate::plasma::PlasmaState;
use crate::screen_factors::ScreenFactors;

/// Debye-Hückel weak screening alone, `S = exp(z1 z2 qlam0z)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeakScreening;

impl ScreeningModel for WeakScreening {
    fn name(&self) -> &'static str {
        "weak"
    }

    fn screen<T: RealScalar>(&self, state: &PlasmaState<T>, f: &ScreenFactors) -> T {
        math::exp(state.qlam0z * (f.z1 * f.z2))
    }
}
