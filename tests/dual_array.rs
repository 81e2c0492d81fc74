use microdual::{math, seed_array, Dual, Dual64, DualArray, GradArray};

#[test]
fn product_of_two_seeded_inputs() {
    let mut x = DualArray::<1, 2>::constant(2.0);
    let mut y = DualArray::<1, 2>::constant(3.0);
    seed_array([&mut x, &mut y]);

    let z = x * y;
    assert_eq!(z.val, 6.0);
    assert_eq!(z.grad[1], 3.0);
    assert_eq!(z.grad[2], 2.0);
}

#[test]
fn seed_array_gives_identity() {
    let mut a = DualArray::<1, 3>::constant(0.5);
    let mut b = DualArray::<1, 3>::constant(1.5);
    let mut c = DualArray::<1, 3>::constant(-2.0);
    seed_array([&mut a, &mut b, &mut c]);

    for (row, d) in [a, b, c].iter().enumerate() {
        for slot in 1..=3 {
            let expected = if slot as usize == row + 1 { 1.0 } else { 0.0 };
            assert_eq!(d.grad[slot], expected, "row {row}, slot {slot}");
        }
    }
}

#[test]
fn seeding_overwrites_previous_gradient() {
    let mut x = DualArray::<0, 2>::new(1.0, GradArray::splat(7.0));
    let mut y = DualArray::<0, 2>::new(1.0, GradArray::splat(7.0));
    seed_array([&mut x, &mut y]);
    assert_eq!(x.grad.into_array(), [1.0, 0.0]);
    assert_eq!(y.grad.into_array(), [0.0, 1.0]);
}

#[test]
fn destructure_partials() {
    let mut x = DualArray::<1, 3>::constant(1.0);
    let mut y = DualArray::<1, 3>::constant(2.0);
    let mut z = DualArray::<1, 3>::constant(3.0);
    seed_array([&mut x, &mut y, &mut z]);

    // f = x·y + y·z + x·z
    let f = x * y + y * z + x * z;
    let [dx, dy, dz] = f.grad.into_array();
    assert_eq!((dx, dy, dz), (5.0, 4.0, 3.0));
    assert_eq!(f.grad.get::<0>(), dx);
    assert_eq!(f.grad.get::<2>(), dz);
}

#[test]
fn array_gradient_matches_scalar_gradient() {
    // One pass with two partials agrees with two scalar passes.
    fn f<T: microdual::RealScalar>(x: T, y: T) -> T {
        math::exp(x * 0.5) * math::sqrt(y) / (x + y) - math::atan(x * y)
    }
    let (x0, y0) = (0.8, 2.3);

    let mut x = DualArray::<1, 2>::constant(x0);
    let mut y = DualArray::<1, 2>::constant(y0);
    seed_array([&mut x, &mut y]);
    let both = f(x, y);

    let dx = f(Dual64::variable(x0), Dual64::constant(y0));
    let dy = f(Dual64::constant(x0), Dual64::variable(y0));

    assert_eq!(both.val, dx.val);
    assert_eq!(both.val, f(x0, y0));
    assert_eq!(both.grad[1], dx.grad);
    assert_eq!(both.grad[2], dy.grad);
}

#[test]
fn unary_ops_apply_to_every_slot() {
    let g = GradArray::<f64, 1, 3>::from_array([1.0, -2.0, 0.5]);
    let x = Dual::<f64, _>::new(2.0, g);
    let y = math::log(x);
    assert_eq!(y.grad.into_array(), [0.5, -1.0, 0.25]);

    let s = 3.0 * x - 1.0;
    assert_eq!(s.val, 5.0);
    assert_eq!(s.grad.into_array(), [3.0, -6.0, 1.5]);
}

#[test]
fn quotient_rule_per_slot() {
    let mut u = DualArray::<1, 2>::constant(3.0);
    let mut v = DualArray::<1, 2>::constant(4.0);
    seed_array([&mut u, &mut v]);
    let q = u / v;
    assert_eq!(q.val, 0.75);
    // ∂/∂u = 1/v, ∂/∂v = -u/v²
    assert_eq!(q.grad[1], 0.25);
    assert_eq!(q.grad[2], -0.1875);
}

#[test]
fn min_max_pick_whole_operand() {
    let mut a = DualArray::<1, 2>::constant(1.0);
    let mut b = DualArray::<1, 2>::constant(2.0);
    seed_array([&mut a, &mut b]);
    assert_eq!(math::max(a, b).grad.into_array(), [0.0, 1.0]);
    assert_eq!(math::min(a, b).grad.into_array(), [1.0, 0.0]);
}
