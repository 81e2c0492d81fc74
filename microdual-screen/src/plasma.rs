//! Composition-averaged plasma quantities shared by all screening models.

use microdual::{math, RealScalar};

use crate::network::Network;

/// Avogadro's number, 1/mol.
pub const N_A: f64 = 6.02214076e23;

/// Plasma state at one thermodynamic point.
///
/// `T` is `f64` for a plain evaluation or a dual when temperature
/// derivatives are wanted; every field then carries them along.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlasmaState<T> {
    pub temp: T,
    /// Mean mass number.
    pub abar: T,
    /// Mean charge.
    pub zbar: T,
    /// Mean squared charge.
    pub z2bar: T,
    /// Electron number density.
    pub n_e: T,
    /// Ion-sphere coupling parameter of the electrons.
    pub aa: T,
    /// Weak screening factor per unit `z1 z2`.
    pub qlam0z: T,
    /// Temperature factor of the strong-screening tunnelling parameter.
    pub taufac: T,
}

/// Build the plasma state from temperature, density and molar abundances
/// (`ymass[n] = X_n / A_n`, in network order).
///
/// # Panics
/// If `ymass` does not hold one entry per network species.
pub fn fill_plasma_state<T: RealScalar>(
    temp: T,
    dens: f64,
    ymass: &[T],
    network: &Network,
) -> PlasmaState<T> {
    assert_eq!(
        ymass.len(),
        network.num_species(),
        "one abundance per species expected"
    );

    let mut ytot = T::zero();
    for &y in ymass {
        ytot = ytot + y;
    }
    let abar = T::from_f(1.0) / ytot;

    let mut sum = T::zero();
    let mut sum2 = T::zero();
    for (n, &y) in ymass.iter().enumerate() {
        let z = network.zion(n);
        sum = sum + y * z;
        sum2 = sum2 + y * (z * z);
    }
    let zbar = sum * abar;
    let z2bar = sum2 * abar;

    let n_e = ytot * (dens * N_A) * zbar;

    let rr = ytot * dens;
    let tempi = T::from_f(1.0) / temp;
    let pp = math::sqrt(rr * tempi * (z2bar + zbar));
    let qlam0z = tempi * 1.88e8 * pp;
    let taufac = math::cbrt(tempi) * (4.248719e3 / 3.0);
    let xni = math::cbrt(rr * zbar);
    let aa = tempi * 2.27493e5 * xni;

    PlasmaState {
        temp,
        abar,
        zbar,
        z2bar,
        n_e,
        aa,
        qlam0z,
        taufac,
    }
}
