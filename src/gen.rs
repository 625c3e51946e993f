//! Seeded random generators for blades and multivectors, used by the
//! property tests and benches.

use rand::Rng;

use crate::blade::Blade;
use crate::multivector::Multivector;

/// A random blade: grade uniform in `0..=max_grade`, distinct basis
/// indices drawn from `1..=max_grade`, integer coefficient in
/// `[-100, 100)`. Integer coefficients keep downstream sums exact in
/// f64, so tests can compare results without tolerance games.
pub fn random_blade<R: Rng>(rng: &mut R, max_grade: u32) -> Blade {
    let grade = rng.gen_range(0..=max_grade) as usize;
    let mut basis: Vec<u32> = Vec::with_capacity(grade);
    while basis.len() < grade {
        let index = rng.gen_range(1..=max_grade);
        if !basis.contains(&index) {
            basis.push(index);
        }
    }
    basis.sort_unstable();

    let coeff = rng.gen_range(-100..100) as f64;
    Blade::new(coeff, basis).expect("generated basis indices are distinct and nonzero")
}

/// A random multivector of `1..=max_blades` blades with pairwise
/// distinct bases. `max_blades` must not exceed the number of distinct
/// bases, `2^max_grade`, or the rejection loop cannot finish.
pub fn random_multivector<R: Rng>(rng: &mut R, max_blades: u32, max_grade: u32) -> Multivector {
    let n = rng.gen_range(1..=max_blades) as usize;
    let mut blades: Vec<Blade> = Vec::with_capacity(n);
    while blades.len() < n {
        let b = random_blade(rng, max_grade);
        if !blades.iter().any(|seen| seen.same_basis(&b)) {
            blades.push(b);
        }
    }
    Multivector::from_blades(blades)
}
