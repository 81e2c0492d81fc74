//! Plain floats and zero-gradient duals go through the same code and must
//! agree bit for bit.

use microdual::{math, Dual64, DualArray, RealScalar};

fn unary_table<T: RealScalar>() -> Vec<(&'static str, fn(T) -> T, f64)> {
    vec![
        ("abs", math::abs as fn(T) -> T, -1.7),
        ("acos", math::acos, 0.3),
        ("asin", math::asin, 0.3),
        ("atan", math::atan, 4.2),
        ("cos", math::cos, 2.1),
        ("exp", math::exp, -3.3),
        ("log", math::log, 17.0),
        ("log10", math::log10, 17.0),
        ("sin", math::sin, 2.1),
        ("sqrt", math::sqrt, 2.0),
        ("tan", math::tan, 1.1),
        ("cosh", math::cosh, 0.7),
        ("sinh", math::sinh, 0.7),
        ("tanh", math::tanh, 0.7),
        ("erf", math::erf, 0.45),
        ("log1p", math::log1p, 1e-3),
        ("cbrt", math::cbrt, 27.5),
        ("fast_atan", math::fast_atan, -7.5),
        ("fast_exp", math::fast_exp, 1.25),
    ]
}

#[test]
fn unary_values_match_plain() {
    let plain = unary_table::<f64>();
    let dual = unary_table::<Dual64>();
    for ((name, f, x), (_, g, _)) in plain.into_iter().zip(dual) {
        let p = f(x);
        let d = g(Dual64::constant(x));
        assert_eq!(p.to_bits(), d.val.to_bits(), "{name}({x})");
        assert_eq!(d.grad, 0.0, "{name}({x})");
    }
}

#[test]
fn binary_values_match_plain() {
    let (a, b) = (0.37, -1.9);
    let (da, db) = (Dual64::constant(a), Dual64::constant(b));
    assert_eq!(math::atan2(a, b), math::atan2(da, db).val);
    assert_eq!(math::hypot(a, b), math::hypot(da, db).val);
    assert_eq!(math::min(a, b), math::min(da, db).val);
    assert_eq!(math::max(a, b), math::max(da, db).val);
    assert_eq!(math::pow(a, 5.0 / 12.0), math::pow(da, 5.0 / 12.0).val);
    assert_eq!(math::powf(-b, a), math::powf(-db, da).val);
}

#[test]
fn powf_differentiates_base_and_exponent() {
    // d/dt (t^(1/t)) = t^(1/t) (1 - ln t) / t²
    fn f<T: RealScalar>(t: T) -> T {
        math::powf(t, T::from_f(1.0) / t)
    }
    let t = 2.6f64;
    let d = f(Dual64::variable(t));
    assert_eq!(d.val, f(t));
    let expected = f(t) * (1.0 - t.ln()) / (t * t);
    assert!((d.grad - expected).abs() < 1e-14, "{} vs {expected}", d.grad);

    // Constant exponent: same value and derivative as math::pow.
    let x = Dual64::variable(3.1);
    let c = math::powf(x, Dual64::constant(0.75));
    assert_eq!(c.val, math::pow(x, 0.75).val);
    assert!((c.grad - math::pow(x, 0.75).grad).abs() < 1e-15);
}

/// A screening-style expression mixing every arithmetic form.
fn expression<T: RealScalar>(t: T, rho: f64) -> T {
    let tempi = T::from_f(1.0) / t;
    let pp = math::sqrt(tempi * rho * 1.7);
    let gam = tempi * math::cbrt(T::from_f(rho) * 0.5) * 2.27493e5;
    let cc = gam * 0.896434 - math::pow(gam, 0.25) * 3.4474 - (math::log(gam) + 0.2) * 0.5551;
    let h = math::min(cc - pp * 1e3, T::from_f(300.0));
    math::exp(math::max(h, T::from_f(0.0)))
}

#[test]
fn composite_values_match_plain() {
    for &t in &[1e6, 3.3e7, 1e8, 4.1e9] {
        for &rho in &[10.0, 1e3, 2.2e6] {
            let plain = expression(t, rho);
            let scalar = expression(Dual64::variable(t), rho);
            let array = expression(DualArray::<1, 1>::with_slot(t, 1), rho);
            assert_eq!(plain.to_bits(), scalar.val.to_bits(), "t={t} rho={rho}");
            assert_eq!(plain.to_bits(), array.val.to_bits(), "t={t} rho={rho}");
            assert_eq!(scalar.grad, array.grad[1]);
        }
    }
}
