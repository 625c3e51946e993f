//! Dense-vector interop: mapping a slice of real components onto a sum
//! of grade-1 blades.

use crate::blade::Blade;
use crate::multivector::Multivector;

impl Multivector {
    /// Map component `i` of `v` (0-based in the slice) to `v[i] · e_{i+1}`
    /// and sum. Zero components are pruned away, so a dense vector with
    /// trailing zeros and its truncated form build the same multivector.
    pub fn from_components(v: &[f64]) -> Multivector {
        Multivector::from_blades(
            v.iter()
                .enumerate()
                .map(|(i, &c)| Blade::vector(c, i as u32 + 1))
                .collect(),
        )
    }
}
