use super::*;
use crate::coord::CoordMetric;
use crate::error::GeomError;
use proptest::prelude::*;
use std::f64::consts::TAU;

fn all_seeded(seed: u64) -> Vec<Box<dyn RandomPoint>> {
    vec![
        Box::new(RandomBox::with_seed(seed)),
        Box::new(RandomRectangle::with_seed(seed)),
        Box::new(RandomCircle::with_seed(seed)),
        Box::new(RandomDisk::with_seed(seed)),
        Box::new(RandomLine::with_seed(
            &Coord::new(0.0, 0.0, 0.0),
            &Coord::new(1.0, 2.0, 3.0),
            seed,
        )),
        Box::new(RandomInCylinder::with_seed(seed)),
        Box::new(RandomOnCylinder::with_seed(seed)),
        Box::new(RandomInSphere::with_seed(seed)),
        Box::new(RandomOnSphere::with_seed(seed)),
    ]
}

/// Kolmogorov–Smirnov distance of `xs` against uniform [lo, hi].
fn ks_uniform(mut xs: Vec<f64>, lo: f64, hi: f64) -> f64 {
    xs.sort_by(f64::total_cmp);
    let n = xs.len() as f64;
    xs.iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = ((x - lo) / (hi - lo)).clamp(0.0, 1.0);
            let above = (i as f64 + 1.0) / n - f;
            let below = f - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max)
}

#[test]
fn reset_replays_every_variant() {
    for mut s in all_seeded(11) {
        let first = s.points(32);
        let _ = s.points(5);
        s.reset();
        assert_eq!(s.points(32), first);
        assert_eq!(s.seed(), 11);
    }
}

#[test]
fn point_and_vector_streams_coincide() {
    let mut a = all_seeded(5);
    let mut b = all_seeded(5);
    for (pa, pb) in a.iter_mut().zip(b.iter_mut()) {
        pa.set_offset_xyz(1.0, -2.0, 0.5);
        pb.set_offset_xyz(1.0, -2.0, 0.5);
        for _ in 0..20 {
            let p = pa.next_point();
            let v = pb.next_vector();
            assert_eq!(p, v.to_coord());
        }
    }
}

#[test]
fn offset_replaces_instead_of_accumulating() {
    let mut plain = RandomDisk::with_seed(9);
    let mut shifted = RandomDisk::with_seed(9);
    shifted.set_offset_2d(5.0, 5.0);
    shifted.set_offset_xyz(1.0, 2.0, 3.0);
    assert_eq!(shifted.offset(), Coord::new(1.0, 2.0, 3.0));
    for _ in 0..50 {
        let p = plain.next_point();
        let q = shifted.next_point();
        assert!(q.distance_3d(&(p + Coord::new(1.0, 2.0, 3.0))) < 1e-12);
    }
}

#[test]
fn setters_reject_negative_and_non_finite() {
    let bad = |r: Result<(), GeomError>| {
        assert!(matches!(r, Err(GeomError::InvalidParameter { .. })));
    };
    bad(RandomBox::new().set_size(1.0, -1.0, 1.0).map(|_| ()));
    bad(RandomRectangle::new().set_size(f64::NAN, 1.0).map(|_| ()));
    bad(RandomCircle::new().set_radius(-0.1).map(|_| ()));
    bad(RandomDisk::new().set_radius(f64::INFINITY).map(|_| ()));
    bad(RandomInCylinder::new().set_height(-2.0).map(|_| ()));
    bad(RandomOnCylinder::new().set_radius(-2.0).map(|_| ()));
    bad(RandomInSphere::new().set_radius(-1.0).map(|_| ()));
    bad(RandomOnSphere::new().set_radius(-1.0).map(|_| ()));

    // rejected values leave the previous parameters intact
    let mut r = RandomRectangle::new();
    r.set_size(2.0, 3.0).unwrap();
    assert!(r.set_size(4.0, -1.0).is_err());
    assert_eq!(r.size(), (2.0, 3.0));
}

#[test]
fn zero_extent_collapses() {
    let mut s = RandomInSphere::with_seed(1);
    s.set_radius(0.0).unwrap();
    assert!(s.points(10).iter().all(|p| p.is_zero()));
}

#[test]
fn box_and_rectangle_bounds() {
    let mut b = RandomBox::with_seed(2);
    b.set_size(2.0, 4.0, 6.0).unwrap();
    for p in b.points(5_000) {
        assert!(p.x() >= -1.0 && p.x() < 1.0);
        assert!(p.y() >= -2.0 && p.y() < 2.0);
        assert!(p.z() >= -3.0 && p.z() < 3.0);
    }
    let mut r = RandomRectangle::with_seed(2);
    r.set_size(3.0, 1.0).unwrap();
    for p in r.points(5_000) {
        assert!(p.x().abs() <= 1.5 && p.y().abs() <= 0.5);
        assert_eq!(p.z(), 0.0);
    }
}

#[test]
fn circle_and_mantle_lie_on_surface() {
    let mut c = RandomCircle::with_seed(4);
    c.set_radius(2.5).unwrap();
    for p in c.points(2_000) {
        assert!((p.length_2d() - 2.5).abs() < 1e-9);
        assert_eq!(p.z(), 0.0);
    }
    let mut m = RandomOnCylinder::with_seed(4);
    m.set_radius(1.5).unwrap().set_height(4.0).unwrap();
    for p in m.points(2_000) {
        assert!((p.length_2d() - 1.5).abs() < 1e-9);
        assert!(p.z() >= -2.0 && p.z() < 2.0);
    }
}

#[test]
fn line_is_half_open_segment() {
    let a = Coord::new(1.0, 1.0, 1.0);
    let b = Coord::new(3.0, -1.0, 5.0);
    let mut l = RandomLine::with_seed(&a, &b, 8);
    let d = b - a;
    for p in l.points(5_000) {
        let t = (p - a).dot(&d) / d.dot(&d);
        assert!((0.0..1.0).contains(&t));
        assert!((p - (a + d * t)).length_3d() < 1e-9);
    }
    l.set_endpoints(&b, &a);
    assert_eq!(l.start(), b);
    assert_eq!(l.end(), a);
}

#[test]
fn disk_and_cylinder_fill_area_uniformly() {
    const N: usize = 50_000;
    const BINS: usize = 10;
    let mut disk = RandomDisk::with_seed(21);
    disk.set_radius(2.0).unwrap();
    let mut cyl = RandomInCylinder::with_seed(22);
    cyl.set_radius(2.0).unwrap().set_height(3.0).unwrap();

    let samplers: [&mut dyn RandomPoint; 2] = [&mut disk, &mut cyl];
    for s in samplers {
        // ρ² is uniform on [0, r²] for an area-uniform disk
        let mut hist = [0usize; BINS];
        for _ in 0..N {
            let p = s.next_point();
            let q = p.sq_length_2d() / 4.0;
            assert!(q < 1.0 + 1e-12);
            hist[((q * BINS as f64) as usize).min(BINS - 1)] += 1;
        }
        let expected = (N / BINS) as f64;
        for count in hist {
            assert!(
                (count as f64 - expected).abs() < 0.15 * expected,
                "bin count {count} vs {expected}"
            );
        }
    }
}

#[test]
fn sphere_surface_is_area_uniform() {
    const N: usize = 20_000;
    let r = 2.0;
    let mut s = RandomOnSphere::with_seed(31);
    s.set_radius(r).unwrap();
    let pts = s.points(N);
    for p in &pts {
        assert!((p.length_3d() - r).abs() < 1e-9);
    }
    let mean_z = pts.iter().map(|p| p.z()).sum::<f64>() / N as f64;
    assert!(mean_z.abs() < 0.05, "mean z = {mean_z}");
    // Archimedes: z is uniform on [-r, r]
    let d = ks_uniform(pts.iter().map(|p| p.z()).collect(), -r, r);
    assert!(d < 1.95 / (N as f64).sqrt(), "KS = {d}");
}

#[test]
fn sphere_volume_is_volume_uniform() {
    const N: usize = 20_000;
    let r = 1.5;
    let mut s = RandomInSphere::with_seed(32);
    s.set_radius(r).unwrap();
    let pts = s.points(N);
    for p in &pts {
        assert!(p.length_3d() <= r + 1e-12);
    }
    let d = ks_uniform(pts.iter().map(|p| (p.length_3d() / r).powi(3)).collect(), 0.0, 1.0);
    assert!(d < 1.95 / (N as f64).sqrt(), "KS = {d}");
    let d_z = ks_uniform(pts.iter().map(|p| p.z()).collect(), -r, r);
    // z is not uniform in a ball: mass concentrates near the equator
    assert!(d_z > 0.02);
}

#[test]
fn curve_samples_stay_on_curve() {
    let helix = |t: f64| Coord::new(t.cos(), t.sin(), t / TAU);
    let mut s = RandomCurve::with_seed(helix, 0.0, TAU, 3).unwrap();
    for p in s.points(1_000) {
        assert!((p.length_2d() - 1.0).abs() < 1e-9);
        assert!(p.z() >= 0.0 && p.z() < 1.0);
        let t = p.z() * TAU;
        assert!(p.distance_3d(&helix(t)) < 1e-9);
    }
    assert!(RandomCurve::new(helix, 0.0, f64::NAN).is_err());
    assert!(s.set_range(f64::NEG_INFINITY, 1.0).is_err());
    assert_eq!(s.range(), (0.0, TAU));
}

#[test]
fn sampler_spec_parses_and_builds() {
    let json = r#"{ "shape": "sphere_surface", "radius": 2.0, "seed": 7, "offset": [0, 0, 1] }"#;
    let spec: SamplerSpec = serde_json::from_str(json).unwrap();
    assert_eq!(spec.shape, SamplerShape::SphereSurface { radius: 2.0 });
    let mut built = spec.build().unwrap();
    let mut manual = RandomOnSphere::with_seed(7);
    manual.set_radius(2.0).unwrap();
    manual.set_offset_xyz(0.0, 0.0, 1.0);
    assert_eq!(built.seed(), 7);
    assert_eq!(built.points(10), manual.points(10));
}

#[test]
fn sampler_spec_defaults_and_validation() {
    let spec: SamplerSpec = serde_json::from_str(r#"{ "shape": "box" }"#).unwrap();
    assert_eq!(
        spec.shape,
        SamplerShape::Box {
            x: 1.0,
            y: 1.0,
            z: 1.0
        }
    );
    assert_eq!(spec.seed, None);
    assert_eq!(spec.offset, [0.0; 3]);
    assert!(spec.build().is_ok());

    let neg: SamplerSpec =
        serde_json::from_str(r#"{ "shape": "cylinder_volume", "radius": -1.0 }"#).unwrap();
    assert!(matches!(
        neg.build(),
        Err(GeomError::InvalidParameter { name: "radius", .. })
    ));

    let mut far = SamplerSpec::new(SamplerShape::Disk { radius: 1.0 });
    far.offset = [f64::NAN, 0.0, 0.0];
    assert!(far.build().is_err());

    let mut line = SamplerSpec::new(SamplerShape::Line {
        start: [0.0; 3],
        end: [1.0, f64::INFINITY, 0.0],
    });
    assert!(matches!(
        line.build(),
        Err(GeomError::InvalidParameter { name: "end", .. })
    ));
    line.shape = SamplerShape::Line {
        start: [f64::NAN, 0.0, 0.0],
        end: [1.0; 3],
    };
    assert!(matches!(
        line.build(),
        Err(GeomError::InvalidParameter { name: "start", .. })
    ));

    assert!(serde_json::from_str::<SamplerSpec>(r#"{ "shape": "torus" }"#).is_err());
}

proptest! {
    #[test]
    fn every_variant_is_seed_deterministic(seed in any::<u64>()) {
        for (mut a, mut b) in all_seeded(seed).into_iter().zip(all_seeded(seed)) {
            prop_assert_eq!(a.points(8), b.points(8));
        }
    }

    #[test]
    fn box_respects_arbitrary_extents(
        x in 0.0f64..10.0,
        y in 0.0f64..10.0,
        z in 0.0f64..10.0,
        seed in any::<u64>(),
    ) {
        let mut b = RandomBox::with_seed(seed);
        b.set_size(x, y, z).unwrap();
        for p in b.points(16) {
            prop_assert!(p.x().abs() <= x / 2.0);
            prop_assert!(p.y().abs() <= y / 2.0);
            prop_assert!(p.z().abs() <= z / 2.0);
        }
    }
}
