use rand::rngs::StdRng;
use rand::SeedableRng;

use space_invaders::geometry::*;

#[test]
fn overlapping_rects_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn touching_edges_count_as_intersection() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.intersects(&Rect::new(10.0, 0.0, 5.0, 5.0)));
    assert!(a.intersects(&Rect::new(0.0, 10.0, 5.0, 5.0)));
    assert!(a.intersects(&Rect::new(10.0, 10.0, 1.0, 1.0)));
}

#[test]
fn separated_rects_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!a.intersects(&Rect::new(10.5, 0.0, 5.0, 5.0))); // right
    assert!(!a.intersects(&Rect::new(-6.0, 0.0, 5.0, 5.0))); // left
    assert!(!a.intersects(&Rect::new(0.0, -6.0, 5.0, 5.0))); // above
    assert!(!a.intersects(&Rect::new(0.0, 10.5, 5.0, 5.0))); // below
}

#[test]
fn containment_intersects() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn clamp_bounds_value() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
}

#[test]
fn rand_between_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let v = rand_between(&mut rng, 10.0, 20.0);
        assert!((10.0..20.0).contains(&v));
    }
    assert_eq!(rand_between(&mut rng, 3.0, 3.0), 3.0);
}
