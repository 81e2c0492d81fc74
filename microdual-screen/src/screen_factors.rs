//! Per-pair constants of the screening formulas.

/// Charge and mass combinations of a nuclide pair that the screening
/// routines need over and over. They depend on the pair only, so each
/// reaction's bundle is computed once and shared read-only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenFactors {
    pub z1: f64,
    pub a1: f64,
    pub z2: f64,
    pub a2: f64,
    /// `(z1 + z2)^(1/3)`
    pub zs13: f64,
    pub zs13inv: f64,
    /// `(z1 + z2)^(5/3) - z1^(5/3) - z2^(5/3)`
    pub zhat: f64,
    /// `(z1 + z2)^(5/12) - z1^(5/12) - z2^(5/12)`
    pub zhat2: f64,
    /// `5/3 ln(z1 z2 / (z1 + z2))`
    pub lzav: f64,
    /// `(z1² z2² a1 a2 / (a1 + a2))^(1/3)`
    pub aznut: f64,
}

pub fn calculate_screen_factor(z1: f64, a1: f64, z2: f64, a2: f64) -> ScreenFactors {
    const FIVE_THIRDS: f64 = 5.0 / 3.0;
    const FIVE_TWELFTHS: f64 = 5.0 / 12.0;

    let zs = z1 + z2;
    let zs13 = zs.cbrt();

    ScreenFactors {
        z1,
        a1,
        z2,
        a2,
        zs13,
        zs13inv: 1.0 / zs13,
        zhat: zs.powf(FIVE_THIRDS) - z1.powf(FIVE_THIRDS) - z2.powf(FIVE_THIRDS),
        zhat2: zs.powf(FIVE_TWELFTHS) - z1.powf(FIVE_TWELFTHS) - z2.powf(FIVE_TWELFTHS),
        lzav: FIVE_THIRDS * (z1 * z2 / zs).ln(),
        aznut: (z1 * z1 * z2 * z2 * a1 * a2 / (a1 + a2)).cbrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn alpha_alpha() {
        let f = calculate_screen_factor(2.0, 4.0, 2.0, 4.0);
        assert_relative_eq!(f.zs13, 4.0f64.cbrt(), max_relative = 1e-15);
        assert_relative_eq!(f.zs13 * f.zs13inv, 1.0, max_relative = 1e-15);
        assert_relative_eq!(
            f.zhat,
            4.0f64.powf(5.0 / 3.0) - 2.0 * 2.0f64.powf(5.0 / 3.0),
            max_relative = 1e-14
        );
        assert_relative_eq!(f.lzav, 5.0 / 3.0 * 1.0f64.ln(), epsilon = 1e-15);
        // (16 · 16 / 8)^(1/3) = 32^(1/3)
        assert_relative_eq!(f.aznut, 32.0f64.cbrt(), max_relative = 1e-15);
    }

    #[test]
    fn symmetric_in_partners() {
        let a = calculate_screen_factor(6.0, 12.0, 1.0, 1.0);
        let b = calculate_screen_factor(1.0, 1.0, 6.0, 12.0);
        assert_eq!(a.zhat, b.zhat);
        assert_eq!(a.zhat2, b.zhat2);
        assert_eq!(a.lzav, b.lzav);
        assert_relative_eq!(a.aznut, b.aznut, max_relative = 1e-15);
    }
}
