//! Multivector canonicalization.
//!
//! A raw term list straight out of a product expansion carries duplicate
//! bases, zero blades, and near-cancelled coefficients in arbitrary
//! order. `prune` folds it into the unique canonical form: one term per
//! basis, nothing within tolerance of zero, sorted by grade then basis.

use std::collections::BTreeMap;

use crate::blade::Blade;

/// Default tolerance: summed coefficients with absolute value at or
/// below this are treated as zero and dropped.
pub const EPSILON: f64 = 1e-12;

/// Canonicalize a raw term list with the default tolerance.
#[inline]
pub fn prune(terms: Vec<Blade>) -> Vec<Blade> {
    prune_with(terms, EPSILON)
}

/// Canonicalize a raw term list: group terms by basis, sum coefficients
/// within each group, and drop groups whose sum lands within `eps` of
/// zero.
///
/// The map key is `(grade, basis)`, so iteration yields groups already
/// in canonical display order (grade first, then lexicographic basis).
/// O(n log n) in the number of raw terms; idempotent, since a canonical
/// list has one term per key and no near-zero coefficients to drop.
pub fn prune_with(terms: Vec<Blade>, eps: f64) -> Vec<Blade> {
    let mut groups: BTreeMap<(usize, Vec<u32>), f64> = BTreeMap::new();
    for term in terms {
        let coeff = term.coeff();
        let key = (term.grade(), term.into_basis());
        *groups.entry(key).or_insert(0.0) += coeff;
    }

    groups
        .into_iter()
        .filter(|(_, coeff)| coeff.abs() > eps)
        .map(|((_, basis), coeff)| Blade::from_raw(coeff, basis))
        .collect()
}
