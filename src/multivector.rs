//! Multivectors: sums of blades, possibly of mixed grade, with the full
//! algebra engine on top.
//!
//! Every binary product expands as the Cartesian product of the two term
//! lists, applies the blade-level operation to each pair, and
//! canonicalizes the concatenated result. Operands are never mutated;
//! every public operation returns a fresh canonical multivector.

use std::fmt;
use std::ops::{Add, BitAnd, BitXor, Mul, Neg, Not, Sub};

use rayon::prelude::*;

use crate::blade::Blade;
use crate::canonical::prune;
use crate::error::GcaError;

/// Pair counts at or above this run the product expansion on the rayon
/// pool; below it the sequential loop wins. Each partition collects its
/// own raw terms and the canonicalizer then merges the combined list
/// single-threaded.
const PAR_THRESHOLD: usize = 4096;

/// A sum of blades kept in canonical form: at most one term per basis
/// set, no coefficient within tolerance of zero, terms sorted by grade
/// then basis. The empty term list is the additive identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Multivector {
    terms: Vec<Blade>,
}

impl Multivector {
    /// The additive identity: no terms.
    #[inline]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Build from a list of blades, canonicalizing immediately.
    pub fn from_blades(terms: Vec<Blade>) -> Self {
        Self {
            terms: prune(terms),
        }
    }

    /// The canonical term list.
    #[inline]
    pub fn terms(&self) -> &[Blade] {
        &self.terms
    }

    /// Whether this is the additive identity.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Cartesian-product expansion over both term lists: `per_pair`
    /// pushes the blades produced for one pair, and the collected raw
    /// list is canonicalized in a single pass afterwards.
    fn expand<F>(&self, other: &Multivector, per_pair: F) -> Multivector
    where
        F: Fn(&Blade, &Blade, &mut Vec<Blade>) + Sync,
    {
        let pairs = self.terms.len() * other.terms.len();
        let raw: Vec<Blade> = if pairs >= PAR_THRESHOLD {
            self.terms
                .par_iter()
                .flat_map_iter(|a| {
                    let mut out = Vec::with_capacity(2 * other.terms.len());
                    for b in &other.terms {
                        per_pair(a, b, &mut out);
                    }
                    out
                })
                .collect()
        } else {
            let mut out = Vec::with_capacity(2 * pairs);
            for a in &self.terms {
                for b in &other.terms {
                    per_pair(a, b, &mut out);
                }
            }
            out
        };
        Multivector { terms: prune(raw) }
    }

    /// Inner product: contracting product of every blade pair.
    pub fn dot(&self, other: &Multivector) -> Multivector {
        self.expand(other, |a, b, out| out.push(a.inner(b)))
    }

    /// Outer product: extending product of every blade pair.
    pub fn wedge(&self, other: &Multivector) -> Multivector {
        self.expand(other, |a, b, out| out.push(a.outer(b)))
    }

    /// Geometric product: each blade pair contributes both its
    /// contracting and its extending product, the grade-lowering and
    /// grade-raising halves of `ab`.
    pub fn gp(&self, other: &Multivector) -> Multivector {
        self.expand(other, |a, b, out| {
            out.push(a.inner(b));
            out.push(a.outer(b));
        })
    }

    /// Sum: concatenate term lists, canonicalize.
    pub fn add(&self, other: &Multivector) -> Multivector {
        let mut raw = self.terms.clone();
        raw.extend(other.terms.iter().cloned());
        Multivector { terms: prune(raw) }
    }

    /// Difference: negate the second operand's terms, then sum.
    pub fn sub(&self, other: &Multivector) -> Multivector {
        let mut raw = self.terms.clone();
        raw.extend(other.terms.iter().map(|b| b.scale(-1.0)));
        Multivector { terms: prune(raw) }
    }

    /// Add a scalar: appends a grade-0 blade and lets the canonicalizer
    /// merge it with any existing scalar term.
    pub fn add_scalar(&self, x: f64) -> Multivector {
        let mut raw = self.terms.clone();
        raw.push(Blade::scalar(x));
        Multivector { terms: prune(raw) }
    }

    /// Subtract a scalar.
    #[inline]
    pub fn sub_scalar(&self, x: f64) -> Multivector {
        self.add_scalar(-x)
    }

    /// Scale every term by `x`.
    pub fn scale(&self, x: f64) -> Multivector {
        Multivector {
            terms: prune(self.terms.iter().map(|b| b.scale(x)).collect()),
        }
    }

    /// Divide every term by a scalar. Zero divisor is an error.
    pub fn div_scalar(&self, x: f64) -> Result<Multivector, GcaError> {
        if x == 0.0 {
            return Err(GcaError::DivisionByZero);
        }
        Ok(self.scale(1.0 / x))
    }

    /// Divide by a multivector: `self * (~n / mag(n))`. Fails when
    /// `mag(n)` is zero.
    pub fn div(&self, other: &Multivector) -> Result<Multivector, GcaError> {
        let inv = other.conj().div_scalar(other.mag())?;
        Ok(self.gp(&inv))
    }

    /// Conjugate (reversion) of every term.
    pub fn conj(&self) -> Multivector {
        Multivector {
            terms: prune(self.terms.iter().map(Blade::conj).collect()),
        }
    }

    /// Magnitude: the sum of the individual blade magnitudes. This is
    /// the definition division depends on, deliberately simpler than the
    /// scalar part of `m * ~m`.
    pub fn mag(&self) -> f64 {
        self.terms.iter().map(Blade::mag).sum()
    }

    /// Grade projection: the sub-multivector holding exactly the terms
    /// of grade `k`. A subset of a canonical list is still canonical, so
    /// no re-prune is needed.
    pub fn grade_part(&self, k: usize) -> Multivector {
        Multivector {
            terms: self
                .terms
                .iter()
                .filter(|b| b.grade() == k)
                .cloned()
                .collect(),
        }
    }
}

impl From<Blade> for Multivector {
    fn from(b: Blade) -> Self {
        Multivector::from_blades(vec![b])
    }
}

impl From<f64> for Multivector {
    fn from(v: f64) -> Self {
        Multivector::from_blades(vec![Blade::scalar(v)])
    }
}

// Operator sugar mirrors the method set for the total operations.
// Division stays method-only so its failure mode is explicit.

impl Add for &Multivector {
    type Output = Multivector;
    fn add(self, rhs: &Multivector) -> Multivector {
        Multivector::add(self, rhs)
    }
}

impl Add for Multivector {
    type Output = Multivector;
    fn add(self, rhs: Multivector) -> Multivector {
        Multivector::add(&self, &rhs)
    }
}

impl Sub for &Multivector {
    type Output = Multivector;
    fn sub(self, rhs: &Multivector) -> Multivector {
        Multivector::sub(self, rhs)
    }
}

impl Sub for Multivector {
    type Output = Multivector;
    fn sub(self, rhs: Multivector) -> Multivector {
        Multivector::sub(&self, &rhs)
    }
}

impl Mul for &Multivector {
    type Output = Multivector;
    fn mul(self, rhs: &Multivector) -> Multivector {
        self.gp(rhs)
    }
}

impl Mul for Multivector {
    type Output = Multivector;
    fn mul(self, rhs: Multivector) -> Multivector {
        self.gp(&rhs)
    }
}

impl Mul<f64> for &Multivector {
    type Output = Multivector;
    fn mul(self, rhs: f64) -> Multivector {
        self.scale(rhs)
    }
}

impl Mul<f64> for Multivector {
    type Output = Multivector;
    fn mul(self, rhs: f64) -> Multivector {
        self.scale(rhs)
    }
}

impl BitAnd for &Multivector {
    type Output = Multivector;
    fn bitand(self, rhs: &Multivector) -> Multivector {
        self.dot(rhs)
    }
}

impl BitAnd for Multivector {
    type Output = Multivector;
    fn bitand(self, rhs: Multivector) -> Multivector {
        self.dot(&rhs)
    }
}

impl BitXor for &Multivector {
    type Output = Multivector;
    fn bitxor(self, rhs: &Multivector) -> Multivector {
        self.wedge(rhs)
    }
}

impl BitXor for Multivector {
    type Output = Multivector;
    fn bitxor(self, rhs: Multivector) -> Multivector {
        self.wedge(&rhs)
    }
}

impl Neg for &Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        self.scale(-1.0)
    }
}

impl Neg for Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        self.scale(-1.0)
    }
}

impl Not for &Multivector {
    type Output = Multivector;
    fn not(self) -> Multivector {
        self.conj()
    }
}

impl Not for Multivector {
    type Output = Multivector;
    fn not(self) -> Multivector {
        self.conj()
    }
}

impl fmt::Display for Multivector {
    /// Terms in canonical order, the first as-is, the rest prefixed with
    /// a space and a `+` when their coefficient is non-negative (negative
    /// coefficients carry their own sign). The additive identity renders
    /// as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (n, b) in self.terms.iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
                if b.coeff() >= 0.0 {
                    write!(f, "+")?;
                }
            }
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}
