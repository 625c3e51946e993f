// tests/multivector_tests.rs

use gca::{Blade, GcaError, Multivector};

const EPS: f64 = 1e-12;

/// Unit grade-1 multivector `e_i`.
fn e(i: u32) -> Multivector {
    Multivector::from(Blade::vector(1.0, i))
}

#[test]
fn geometric_product_end_to_end() {
    // a = e1 + e2, b = e1 - e2
    let a = e(1).add(&e(2));
    let b = e(1).sub(&e(2));

    // e1e1 - e1e2 + e2e1 - e2e2 = 1 - e12 - e12 - 1 = -2 e12
    let p = a.gp(&b);
    assert_eq!(p.terms().len(), 1);
    let t = &p.terms()[0];
    assert_eq!(t.basis(), &[1, 2]);
    assert!((t.coeff() + 2.0).abs() < EPS);
}

#[test]
fn cancellation_yields_empty_identity() {
    let p = Multivector::from(3.0).add(&Multivector::from(-3.0));
    assert!(p.is_zero());
    assert!(p.terms().is_empty());
    assert_eq!(p.to_string(), "0");
}

#[test]
fn zero_scalar_builds_the_identity() {
    // policy: the additive identity is the empty term list, even when
    // built from an explicit zero scalar
    assert!(Multivector::from(0.0).is_zero());
    assert!(Multivector::zero().is_zero());
    assert_eq!(Multivector::zero(), Multivector::from(0.0));
}

#[test]
fn magnitude_sums_per_blade() {
    let m = e(1).add(&e(2));
    assert!((m.mag() - 2.0).abs() < EPS);

    let n = e(1).scale(3.0).add(&e(2).scale(4.0));
    // 9 + 16, per-blade magnitudes, not the Euclidean norm
    assert!((n.mag() - 25.0).abs() < EPS);

    assert_eq!(Multivector::zero().mag(), 0.0);
}

#[test]
fn dot_and_wedge_of_a_vector_with_itself() {
    let a = e(1).add(&e(2));

    // a & a = 2: cross terms are orthogonal and vanish
    let d = a.dot(&a);
    assert_eq!(d.terms().len(), 1);
    assert_eq!(d.terms()[0].grade(), 0);
    assert!((d.terms()[0].coeff() - 2.0).abs() < EPS);

    // a ^ a = 0: e1^e2 and e2^e1 cancel
    assert!(a.wedge(&a).is_zero());
}

#[test]
fn add_and_sub_merge_terms() {
    let m = e(1).scale(2.0).add(&e(1));
    assert_eq!(m.terms().len(), 1);
    assert!((m.terms()[0].coeff() - 3.0).abs() < EPS);

    assert!(m.sub(&m).is_zero());
}

#[test]
fn scalar_add_merges_into_scalar_term() {
    let m = e(1).add_scalar(2.0).add_scalar(3.0);
    assert_eq!(m.to_string(), "5 +1 e1");

    let n = m.sub_scalar(5.0);
    assert_eq!(n.to_string(), "1 e1");
}

#[test]
fn scale_and_divide_by_scalar() {
    let m = e(1).add(&e(2)).scale(3.0);
    assert!((m.terms()[0].coeff() - 3.0).abs() < EPS);

    let half = m.div_scalar(2.0).unwrap();
    assert!((half.terms()[0].coeff() - 1.5).abs() < EPS);

    assert_eq!(m.div_scalar(0.0), Err(GcaError::DivisionByZero));

    // scaling by zero collapses to the identity
    assert!(m.scale(0.0).is_zero());
}

#[test]
fn divide_by_multivector_round_trips() {
    // (2 e1) / e1 = 2
    let m = e(1).scale(2.0);
    let q = m.div(&e(1)).unwrap();
    assert_eq!(q.terms().len(), 1);
    assert_eq!(q.terms()[0].grade(), 0);
    assert!((q.terms()[0].coeff() - 2.0).abs() < EPS);

    // m / m = 1 for a unit blade
    let r = e(2).div(&e(2)).unwrap();
    assert!((r.terms()[0].coeff() - 1.0).abs() < EPS);
}

#[test]
fn divide_by_zero_multivector_fails() {
    assert_eq!(
        e(1).div(&Multivector::zero()),
        Err(GcaError::DivisionByZero)
    );
}

#[test]
fn conjugate_negates_bivector_part() {
    let b = e(1).wedge(&e(2));
    assert_eq!(b.conj().to_string(), "-1 e1^e2");
    assert_eq!(e(1).conj(), e(1));
    // involution
    assert_eq!(b.conj().conj(), b);
}

#[test]
fn grade_projection() {
    let m = Multivector::from(2.0)
        .add(&e(1))
        .add(&e(1).wedge(&e(2)).scale(3.0));

    assert_eq!(m.grade_part(0).to_string(), "2");
    assert_eq!(m.grade_part(1).to_string(), "1 e1");
    assert_eq!(m.grade_part(2).to_string(), "3 e1^e2");
    assert!(m.grade_part(3).is_zero());
}

#[test]
fn display_orders_by_grade_then_basis() {
    let m = Multivector::from_blades(vec![
        Blade::new(4.0, vec![1, 2]).unwrap(),
        Blade::vector(-1.0, 2),
        Blade::scalar(3.0),
    ]);
    assert_eq!(m.to_string(), "3 -1 e2 +4 e1^e2");
}

#[test]
fn display_is_stable_and_order_invariant() {
    let ab = Multivector::from_blades(vec![
        Blade::vector(1.0, 1),
        Blade::new(2.0, vec![1, 2]).unwrap(),
    ]);
    let ba = Multivector::from_blades(vec![
        Blade::new(2.0, vec![1, 2]).unwrap(),
        Blade::vector(1.0, 1),
    ]);
    assert_eq!(ab.to_string(), ba.to_string());
    assert_eq!(ab.to_string(), ab.to_string());
}

#[test]
fn dense_components_round_trip() {
    let m = Multivector::from_components(&[3.0, 0.0, -1.5]);
    assert_eq!(m.to_string(), "3 e1 -1.5 e3");
}

#[test]
fn operator_sugar() {
    let a = e(1) + e(2);
    let b = e(1) - e(2);

    assert_eq!((&a * &b).to_string(), "-2 e1^e2");
    assert_eq!((&a & &a).to_string(), "2");
    assert!((&a ^ &a).is_zero());
    assert!((-&a + a.clone()).is_zero());
    assert_eq!((!&a), a.conj());
    assert_eq!((&a * 2.0).terms()[0].coeff(), 2.0);
}

#[test]
fn product_with_zero_is_zero() {
    let a = e(1).add(&e(2));
    assert!(a.gp(&Multivector::zero()).is_zero());
    assert!(Multivector::zero().gp(&a).is_zero());
    assert!(a.dot(&Multivector::zero()).is_zero());
    assert!(a.wedge(&Multivector::zero()).is_zero());
}

#[test]
fn rotor_sandwich_rotates_a_vector() {
    // R = cos(45°) - sin(45°) e12 is a rotor for a 90° rotation in the
    // e1e2 plane; with this sign convention R e1 ~R lands on e2.
    let half = std::f64::consts::FRAC_PI_4;
    let r = Multivector::from(half.cos()).add(&e(1).wedge(&e(2)).scale(-half.sin()));
    let rotated = r.gp(&e(1)).gp(&r.conj());

    assert_eq!(rotated.terms().len(), 1);
    assert_eq!(rotated.terms()[0].basis(), &[2]);
    assert!((rotated.terms()[0].coeff() - 1.0).abs() < 1e-9);
}
