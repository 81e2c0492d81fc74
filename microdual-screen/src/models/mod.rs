//! Screening prescriptions.
//!
//! Each model turns a [`PlasmaState`] and a pair's [`ScreenFactors`] into the
//! enhancement factor `S`. Models are written once against [`RealScalar`] and
//! run with plain `f64` or with duals.

mod screen5;
mod weak;

pub use screen5::Screen5;
pub use weak::WeakScreening;

use microdual::RealScalar;

use crate::plasma::PlasmaState;
use crate::screen_factors::ScreenFactors;

pub trait ScreeningModel: Sync {
    /// Short identifier used in log messages.
    fn name(&self) -> &'static str;

    /// Screening enhancement factor of the pair described by `factors`.
    fn screen<T: RealScalar>(&self, state: &PlasmaState<T>, factors: &ScreenFactors) -> T;
}
