use microdual::GradArray;

type G3 = GradArray<f64, 1, 3>;

#[test]
fn default_is_zero() {
    let g = G3::default();
    assert_eq!(g.into_array(), [0.0; 3]);
    assert_eq!(g, G3::zero());
}

#[test]
fn splat_and_bounds() {
    let g = GradArray::<f64, -2, 4>::splat(1.5);
    assert_eq!(GradArray::<f64, -2, 4>::lo(), -2);
    assert_eq!(GradArray::<f64, -2, 4>::hi(), 1);
    assert_eq!(g[-2], 1.5);
    assert_eq!(g[1], 1.5);
    assert_eq!(g.len(), 4);
}

#[test]
fn index_honours_lower_bound() {
    let mut g = GradArray::<f64, 5, 2>::zero();
    g[5] = 1.0;
    g[6] = 2.0;
    assert_eq!(g.into_array(), [1.0, 2.0]);
}

#[test]
#[should_panic(expected = "outside")]
fn index_above_range_panics() {
    let g = G3::zero();
    let _ = g[4];
}

#[test]
fn compound_assignment() {
    let mut a = G3::from_array([1.0, 2.0, 3.0]);
    let b = G3::from_array([4.0, 5.0, 6.0]);
    a += b;
    assert_eq!(a.into_array(), [5.0, 7.0, 9.0]);
    a -= b;
    assert_eq!(a.into_array(), [1.0, 2.0, 3.0]);
    a *= b;
    assert_eq!(a.into_array(), [4.0, 10.0, 18.0]);
    a /= b;
    assert_eq!(a.into_array(), [1.0, 2.0, 3.0]);
    a *= 2.0;
    assert_eq!(a.into_array(), [2.0, 4.0, 6.0]);
    a /= 4.0;
    assert_eq!(a.into_array(), [0.5, 1.0, 1.5]);
}

#[test]
fn binary_ops_are_componentwise() {
    let a = G3::from_array([1.0, 2.0, 4.0]);
    let b = G3::from_array([2.0, 2.0, 2.0]);
    assert_eq!((a + b).into_array(), [3.0, 4.0, 6.0]);
    assert_eq!((a - b).into_array(), [-1.0, 0.0, 2.0]);
    assert_eq!((a * b).into_array(), [2.0, 4.0, 8.0]);
    assert_eq!((a / b).into_array(), [0.5, 1.0, 2.0]);
    assert_eq!((-a).into_array(), [-1.0, -2.0, -4.0]);
}

#[test]
fn scalar_broadcast_both_sides() {
    let a = G3::from_array([1.0, 2.0, 4.0]);
    assert_eq!((a * 3.0).into_array(), [3.0, 6.0, 12.0]);
    assert_eq!((3.0 * a).into_array(), [3.0, 6.0, 12.0]);
    assert_eq!((a / 2.0).into_array(), [0.5, 1.0, 2.0]);
    assert_eq!((8.0 / a).into_array(), [8.0, 4.0, 2.0]);
    assert_eq!((a + 1.0).into_array(), [2.0, 3.0, 5.0]);
    assert_eq!((1.0 - a).into_array(), [0.0, -1.0, -3.0]);
}

#[test]
fn destructure_in_slot_order() {
    let mut g = G3::zero();
    g[1] = 10.0;
    g[2] = 20.0;
    g[3] = 30.0;
    let [a, b, c]: [f64; 3] = g.into();
    assert_eq!((a, b, c), (10.0, 20.0, 30.0));
    assert_eq!(g.iter().copied().collect::<Vec<_>>(), vec![10.0, 20.0, 30.0]);
}

#[test]
fn display_lists_components() {
    let g = GradArray::<f64, 1, 2>::from_array([1.0, 2.5]);
    assert_eq!(g.to_string(), "[1, 2.5]");
}
