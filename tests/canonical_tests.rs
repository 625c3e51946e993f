// tests/canonical_tests.rs

use gca::{prune, prune_with, Blade, EPSILON};

const EPS: f64 = 1e-12;

#[test]
fn merges_terms_with_equal_bases() {
    let raw = vec![
        Blade::vector(1.0, 1),
        Blade::scalar(4.0),
        Blade::vector(2.5, 1),
    ];
    let out = prune(raw);
    assert_eq!(out.len(), 2);
    // scalar sorts first
    assert_eq!(out[0].grade(), 0);
    assert!((out[0].coeff() - 4.0).abs() < EPS);
    assert_eq!(out[1].basis(), &[1]);
    assert!((out[1].coeff() - 3.5).abs() < EPS);
}

#[test]
fn drops_near_zero_sums() {
    let raw = vec![
        Blade::vector(1.0, 1),
        Blade::vector(-1.0, 1),
        Blade::vector(1e-13, 2),
    ];
    assert!(prune(raw).is_empty());
}

#[test]
fn keeps_coefficients_above_tolerance() {
    let out = prune(vec![Blade::vector(1e-9, 1)]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].coeff(), 1e-9);
}

#[test]
fn custom_tolerance() {
    let raw = vec![Blade::vector(1e-9, 1), Blade::vector(1.0, 2)];
    let out = prune_with(raw, 1e-6);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].basis(), &[2]);

    assert!(EPSILON > 0.0 && EPSILON < 1e-6);
}

#[test]
fn empty_input_stays_empty() {
    assert!(prune(Vec::new()).is_empty());
}

#[test]
fn idempotent() {
    let raw = vec![
        Blade::new(2.0, vec![1, 2]).unwrap(),
        Blade::vector(1.0, 3),
        Blade::vector(-0.5, 3),
        Blade::scalar(7.0),
        Blade::new(-2.0, vec![1, 2]).unwrap(),
    ];
    let once = prune(raw);
    let twice = prune(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn sorts_by_grade_then_basis() {
    let raw = vec![
        Blade::new(1.0, vec![1, 3]).unwrap(),
        Blade::vector(1.0, 2),
        Blade::new(1.0, vec![1, 2]).unwrap(),
        Blade::scalar(1.0),
        Blade::vector(1.0, 1),
    ];
    let out = prune(raw);
    let bases: Vec<&[u32]> = out.iter().map(|b| b.basis()).collect();
    assert_eq!(
        bases,
        vec![&[][..], &[1][..], &[2][..], &[1, 2][..], &[1, 3][..]]
    );
}

#[test]
fn grouping_ignores_input_order() {
    let a = prune(vec![Blade::vector(1.0, 1), Blade::vector(2.0, 1)]);
    let b = prune(vec![Blade::vector(2.0, 1), Blade::vector(1.0, 1)]);
    assert_eq!(a, b);
}
