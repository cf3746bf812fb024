use super::*;
use crate::error::GeomError;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn is_zero_uses_tolerance_not_exact_equality() {
    assert!(Coord::new(1e-12, -1e-12, 0.0).is_zero());
    assert!(!Coord::new(1e-3, 0.0, 0.0).is_zero());
    assert!(MutCoord::zero().is_zero());
}

#[test]
fn trim_shrinks_long_vectors_only() {
    let mut v = MutCoord::new(3.0, 0.0, 0.0);
    v.trim_self(1.0).unwrap();
    assert!((v.length_3d() - 1.0).abs() < 1e-12);
    assert!((v.xd() - 1.0).abs() < 1e-12);

    let mut w = MutCoord::new(0.0, 0.3, 0.4);
    w.trim_self(1.0).unwrap();
    assert_eq!(w, MutCoord::new(0.0, 0.3, 0.4));

    let mut d = MutCoord::new(1.0, 2.0, 2.0);
    d.trim_self(1.5).unwrap();
    let dir = d.to_coord().normalized();
    let expected = Coord::new(1.0, 2.0, 2.0).normalized();
    assert!(dir.distance_3d(&expected) < 1e-12);
    assert!(matches!(
        d.trim_self(-1.0),
        Err(GeomError::InvalidParameter { .. })
    ));
}

#[test]
fn normalize_returns_prior_length_and_skips_zero() {
    let mut v = MutCoord::new(0.0, 3.0, 4.0);
    let len = v.normalize_self();
    assert!((len - 5.0).abs() < 1e-12);
    assert!((v.length_3d() - 1.0).abs() < 1e-12);

    let mut z = MutCoord::new(1e-9, 0.0, 0.0);
    let len0 = z.normalize_self();
    assert!(len0 < 1e-8);
    assert_eq!(z, MutCoord::new(1e-9, 0.0, 0.0));
    assert_eq!(Coord::zero().normalized(), Coord::zero());
}

#[test]
fn div_by_zero_fails_uniformly_and_leaves_value() {
    let mut v = MutCoord::new(1.0, 2.0, 3.0);
    assert_eq!(v.div_self(0.0).unwrap_err(), GeomError::DivideByZero);
    assert_eq!(v, MutCoord::new(1.0, 2.0, 3.0));
    assert_eq!(
        Coord::new(1.0, 2.0, 3.0).div(0.0).unwrap_err(),
        GeomError::DivideByZero
    );
    v.div_self(2.0).unwrap();
    assert_eq!(v, MutCoord::new(0.5, 1.0, 1.5));
}

#[test]
fn chained_in_place_ops() {
    let a = Coord::new(1.0, 0.0, 0.0);
    let b = Coord::new(0.0, 1.0, 0.0);
    let mut v = MutCoord::new(2.0, 0.0, 0.0);
    v.sub_self(&a).cross_self(&b).mul_self(3.0);
    assert_eq!(v, MutCoord::new(0.0, 0.0, 3.0));

    let mut w = MutCoord::new(1.0, 1.0, 1.0);
    w.add_mul_self(2.0, &a).add_self_xyz(0.0, 0.0, -1.0);
    assert_eq!(w, MutCoord::new(3.0, 1.0, 0.0));

    let mut m = MutCoord::new(1.0, 2.0, 3.0);
    m.mul_add_mul_self(2.0, -1.0, &Coord::new(1.0, 1.0, 1.0));
    assert_eq!(m, MutCoord::new(1.0, 3.0, 5.0));

    m.sub_self_xyz(1.0, 3.0, 5.0).scale_self(2.0, 2.0, 2.0);
    assert!(m.is_zero());
}

#[test]
fn value_math_never_touches_self() {
    let p = Coord::new(1.0, 2.0, 3.0);
    let q = Coord::new(-1.0, 0.5, 2.0);
    let _ = p.add(&q);
    let _ = p.mul_add_mul(2.0, 3.0, &q);
    let _ = p.cross(&q);
    assert_eq!(p, Coord::new(1.0, 2.0, 3.0));
    assert_eq!(p + q, Coord::new(0.0, 2.5, 5.0));
    assert_eq!(p - q, Coord::new(2.0, 1.5, 1.0));
    assert_eq!(-p * 2.0, Coord::new(-2.0, -4.0, -6.0));
    assert_eq!(p.add_mul(2.0, &q), Coord::new(-1.0, 3.0, 7.0));
    assert!((p.dot_2d(&q) - 0.0).abs() < 1e-12);
    assert!((p.abs_dot(&Coord::new(-1.0, 0.0, 0.0)) - 1.0).abs() < 1e-12);
    let x = Coord::new(1.0, 0.0, 0.0);
    let y = Coord::new(0.0, 1.0, 0.0);
    let z = Coord::new(0.0, 0.0, 1.0);
    assert!((x.scalar_triple(&y, &z) - 1.0).abs() < 1e-12);
}

#[test]
fn angles_and_heading() {
    let x = Coord::new(1.0, 0.0, 0.0);
    let y = Coord::new(0.0, 2.0, 0.0);
    assert!((x.angle(&y) - FRAC_PI_2).abs() < 1e-12);
    assert!((x.angle(&Coord::new(-5.0, 0.0, 0.0)) - PI).abs() < 1e-12);
    assert_eq!(x.angle(&Coord::zero()), 0.0);
    assert_eq!(Coord::zero().angle(&x), 0.0);
    assert!((x.angle_norm(&y.normalized()) - FRAC_PI_2).abs() < 1e-12);
    assert!((Coord::new(0.0, -1.0, 0.0).heading_2d() + FRAC_PI_2).abs() < 1e-12);
    assert!((Coord::new(-1.0, 0.0, 0.0).heading_2d() - PI).abs() < 1e-12);
}

#[test]
fn distances_2d_ignore_z() {
    let p = Coord::new(0.0, 0.0, 10.0);
    let q = Coord::new(3.0, 4.0, -10.0);
    assert!((p.distance_2d(&q) - 5.0).abs() < 1e-12);
    assert!((p.sq_distance_3d(&q) - 425.0).abs() < 1e-12);
    assert!((q.length_2d() - 5.0).abs() < 1e-12);
    assert!((q.sq_length_3d() - 125.0).abs() < 1e-12);
}

#[test]
fn ortho_normal_2d_rotates_ccw() {
    let n = Coord::new(2.0, 0.0, 7.0).ortho_normal_2d();
    assert!(n.distance_3d(&Coord::new(0.0, 1.0, 0.0)) < 1e-12);
    assert!(Coord::zero().ortho_normal_2d().is_zero());
}

#[test]
fn ortho_normal_3d_holds_for_tiny_vectors() {
    for v in [
        Coord::new(0.0, 0.0, 1e-6),
        Coord::new(1e-9, 2e-9, 0.0),
        Coord::new(3e-7, -1e-7, 2e-7),
        Coord::new(0.0, 5.0, 0.0),
    ] {
        let n = v.ortho_normal_3d();
        assert!((n.length_3d() - 1.0).abs() < 1e-12, "{v:?}");
        assert!((n.dot(&v) / v.length_3d()).abs() < 1e-12, "{v:?}");
    }
    assert_eq!(Coord::zero().ortho_normal_3d(), Coord::zero());
}

fn finite() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

proptest! {
    #[test]
    fn ortho_normal_3d_is_perpendicular_unit(x in finite(), y in finite(), z in finite()) {
        let v = Coord::new(x, y, z);
        prop_assume!(!v.is_zero());
        let n = v.ortho_normal_3d();
        prop_assert!((n.length_3d() - 1.0).abs() < 1e-9);
        prop_assert!(n.dot(&v).abs() < 1e-12 * v.length_3d().max(1.0));
    }

    #[test]
    fn normalize_self_matches_value_normalized(x in finite(), y in finite(), z in finite()) {
        let c = Coord::new(x, y, z);
        let mut m = c.to_mut();
        let len = m.normalize_self();
        prop_assert!((len - c.length_3d()).abs() < 1e-12);
        prop_assert!(m.to_coord().distance_3d(&c.normalized()) < 1e-12);
    }

    #[test]
    fn triangle_inequality(a in finite(), b in finite(), c in finite(), d in finite()) {
        let p = Coord::new(a, b, 0.0);
        let q = Coord::new(c, d, 1.0);
        let o = Coord::zero();
        prop_assert!(p.distance_3d(&q) <= p.distance_3d(&o) + o.distance_3d(&q) + 1e-9);
    }
}
