use microdual::{math, RealScalar};

use super::ScreeningModel;
use crate::plasma::PlasmaState;
use crate::screen_factors::ScreenFactors;

/// Weak screening (Graboske et al. 1973) joined to intermediate and strong
/// screening (Alastuey & Jancovici 1978, Itoh et al. 1979) in the form of
/// Wallace, Woosley & Weaver (1982).
#[derive(Clone, Copy, Debug, Default)]
pub struct Screen5;

/// `2^(1/3)`
const FACT: f64 = 1.25992104989487;

/// Upper limit of the strong-screening expansion parameter.
const ALPH12_MAX: f64 = 1.6;

/// `h12` above this is out of range for `exp`.
const H12_MAX: f64 = 300.0;

impl ScreeningModel for Screen5 {
    fn name(&self) -> &'static str {
        "screen5"
    }

    fn screen<T: RealScalar>(&self, state: &PlasmaState<T>, f: &ScreenFactors) -> T {
        let bb = f.z1 * f.z2;
        let gamp = state.aa;

        let qq = FACT * bb * f.zs13inv;
        let mut gamef = gamp * qq;
        let tau12 = state.taufac * f.aznut;
        let mut alph12 = gamef / tau12;

        if alph12 > T::from_f(ALPH12_MAX) {
            alph12 = T::from_f(ALPH12_MAX);
            gamef = tau12 * ALPH12_MAX;
        }

        let h12w = state.qlam0z * bb;
        let mut h12 = h12w;

        if gamef > T::from_f(0.3) {
            let gamp14 = math::pow(gamp, 0.25);
            let cc = gamp * 0.896434 * f.zhat
                - gamp14 * 3.44740 * f.zhat2
                - (math::log(gamp) + f.lzav) * 0.5551
                - 2.996;

            let a3 = alph12 * alph12 * alph12;
            let rr = T::from_f(5.0 / 32.0) - alph12 * (alph12 * 0.0128 + 0.014);
            let ss = tau12 * rr;
            let tt = alph12 * 0.0180 - 0.0098;
            let uu = alph12 * tt + 0.0055;
            let vv = gamef * alph12 * uu;
            h12 = cc - a3 * (ss + vv);

            let rr = T::from_f(1.0) - a3 * 0.0562;
            let xlgfac = math::max(rr, T::from_f(0.77));
            h12 = math::log(xlgfac) + h12;

            // Blend into the weak regime.
            if gamef <= T::from_f(0.8) {
                let rr = (T::from_f(0.8) - gamef) * 2.0;
                let ss = (gamef - 0.3) * 2.0;
                let vv = T::from_f(1.0) / (rr + ss);
                h12 = vv * (rr * h12w + ss * h12);
            }
        }

        h12 = math::max(math::min(h12, T::from_f(H12_MAX)), T::from_f(0.0));
        math::exp(h12)
    }
}
