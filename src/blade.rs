//! Basis blades: a real coefficient times an ordered product of distinct
//! orthonormal basis vectors.
//!
//! The canonical form keeps the basis indices strictly ascending; any
//! sign from reordering is folded into the coefficient when the blade is
//! built. Blades are immutable: every operation returns a new value.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitXor, Mul, Neg, Not};

use crate::error::GcaError;
use crate::product::{merge_bases, ProductKind};

/// A basis blade `coeff · e_{i1}^e_{i2}^…` with strictly ascending,
/// 1-based basis indices. An empty basis is a scalar (grade 0).
///
/// The metric is positive-definite orthonormal: every basis vector
/// squares to `+1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Blade {
    coeff: f64,
    basis: Vec<u32>,
}

impl Blade {
    /// A scalar blade (grade 0).
    #[inline]
    pub fn scalar(coeff: f64) -> Self {
        Self {
            coeff,
            basis: Vec::new(),
        }
    }

    /// A grade-1 blade `coeff · e_index`.
    ///
    /// Panics if `index` is 0; basis indices are 1-based.
    #[inline]
    pub fn vector(coeff: f64, index: u32) -> Self {
        assert!(index >= 1, "basis indices are 1-based");
        Self {
            coeff,
            basis: vec![index],
        }
    }

    /// Build a blade from an arbitrary basis sequence.
    ///
    /// An out-of-order sequence is normalized to ascending order with the
    /// permutation sign folded into the coefficient. A repeated or zero
    /// index is rejected with [`GcaError::MalformedBasis`]: contraction
    /// semantics assume distinct indices, so duplicates are a caller bug
    /// rather than something to silently contract away.
    pub fn new(coeff: f64, basis: impl Into<Vec<u32>>) -> Result<Self, GcaError> {
        let mut basis = basis.into();
        if let Some(&index) = basis.iter().find(|&&e| e == 0) {
            return Err(GcaError::MalformedBasis { index });
        }

        // Insertion sort, counting transpositions: each swap of adjacent
        // basis vectors flips the sign.
        let mut swaps = 0usize;
        for i in 1..basis.len() {
            let mut j = i;
            while j > 0 && basis[j - 1] > basis[j] {
                basis.swap(j - 1, j);
                swaps += 1;
                j -= 1;
            }
        }

        if let Some(w) = basis.windows(2).find(|w| w[0] == w[1]) {
            return Err(GcaError::MalformedBasis { index: w[0] });
        }

        let coeff = if swaps % 2 == 1 { -coeff } else { coeff };
        Ok(Self { coeff, basis })
    }

    /// Construct from parts already in canonical form. Used by the
    /// product engine and the canonicalizer, which only ever produce
    /// ascending duplicate-free bases.
    #[inline]
    pub(crate) fn from_raw(coeff: f64, basis: Vec<u32>) -> Self {
        debug_assert!(basis.windows(2).all(|w| w[0] < w[1]));
        Self { coeff, basis }
    }

    /// The coefficient.
    #[inline]
    pub fn coeff(&self) -> f64 {
        self.coeff
    }

    /// The basis indices, ascending.
    #[inline]
    pub fn basis(&self) -> &[u32] {
        &self.basis
    }

    /// Number of basis vectors in the blade; 0 for a scalar.
    #[inline]
    pub fn grade(&self) -> usize {
        self.basis.len()
    }

    /// Whether this blade is a scalar (grade 0).
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.basis.is_empty()
    }

    #[inline]
    pub(crate) fn into_basis(self) -> Vec<u32> {
        self.basis
    }

    /// Inner (contracting) product. Shared basis vectors contract to 1;
    /// orthogonal blades give zero. A scalar operand acts as the
    /// multiplicative identity: the other blade's basis passes through.
    pub fn inner(&self, other: &Blade) -> Blade {
        let coeff = self.coeff * other.coeff;

        if self.basis.is_empty() {
            return Blade {
                coeff,
                basis: other.basis.clone(),
            };
        }
        if other.basis.is_empty() {
            return Blade {
                coeff,
                basis: self.basis.clone(),
            };
        }

        let p = merge_bases(&self.basis, &other.basis, ProductKind::Contracting);
        if p.common {
            Blade {
                coeff: coeff * p.sign as f64,
                basis: p.basis,
            }
        } else {
            Blade::scalar(0.0)
        }
    }

    /// Outer (extending, wedge) product. Zero whenever the operands share
    /// a basis vector. A scalar operand also yields zero: a scalar has no
    /// vector part to wedge, and the geometric product relies on the
    /// contracting branch carrying the scalar-times-anything term.
    pub fn outer(&self, other: &Blade) -> Blade {
        if self.basis.is_empty() || other.basis.is_empty() {
            return Blade::scalar(0.0);
        }

        let p = merge_bases(&self.basis, &other.basis, ProductKind::Extending);
        if p.common {
            Blade::scalar(0.0)
        } else {
            Blade {
                coeff: self.coeff * other.coeff * p.sign as f64,
                basis: p.basis,
            }
        }
    }

    /// Conjugate (reversion): reverses the basis-vector product, which
    /// negates the coefficient iff `grade*(grade-1)/2` is odd.
    pub fn conj(&self) -> Blade {
        let k = self.grade();
        let sign = if (k * k.saturating_sub(1) / 2) % 2 == 1 {
            -1.0
        } else {
            1.0
        };
        Blade {
            coeff: self.coeff * sign,
            basis: self.basis.clone(),
        }
    }

    /// Magnitude: the scalar part of `A & ~A`. Equals `coeff²` in the
    /// orthonormal metric, so it is zero iff the coefficient is.
    pub fn mag(&self) -> f64 {
        self.inner(&self.conj()).coeff
    }

    /// Inverse: `~A / mag(A)`. Fails when the magnitude is zero.
    pub fn inv(&self) -> Result<Blade, GcaError> {
        let m = self.mag();
        if m == 0.0 {
            return Err(GcaError::DivisionByZero);
        }
        self.conj().div_scalar(m)
    }

    /// Scale the coefficient; basis unchanged.
    #[inline]
    pub fn scale(&self, x: f64) -> Blade {
        Blade {
            coeff: self.coeff * x,
            basis: self.basis.clone(),
        }
    }

    /// Divide the coefficient by a scalar. Zero divisor is an error.
    pub fn div_scalar(&self, x: f64) -> Result<Blade, GcaError> {
        if x == 0.0 {
            return Err(GcaError::DivisionByZero);
        }
        Ok(Blade {
            coeff: self.coeff / x,
            basis: self.basis.clone(),
        })
    }

    /// Coefficient-blind equality: same grade, same basis sequence. This
    /// is the grouping key the canonicalizer merges on.
    #[inline]
    pub fn same_basis(&self, other: &Blade) -> bool {
        self.basis == other.basis
    }

    /// Canonical display order: lower grade first, ties broken by
    /// lexicographic comparison of the basis sequence.
    pub fn canonical_cmp(&self, other: &Blade) -> Ordering {
        self.grade()
            .cmp(&other.grade())
            .then_with(|| self.basis.cmp(&other.basis))
    }
}

impl BitAnd for &Blade {
    type Output = Blade;
    fn bitand(self, rhs: &Blade) -> Blade {
        self.inner(rhs)
    }
}

impl BitXor for &Blade {
    type Output = Blade;
    fn bitxor(self, rhs: &Blade) -> Blade {
        self.outer(rhs)
    }
}

impl Mul<f64> for &Blade {
    type Output = Blade;
    fn mul(self, rhs: f64) -> Blade {
        self.scale(rhs)
    }
}

impl Neg for &Blade {
    type Output = Blade;
    fn neg(self) -> Blade {
        self.scale(-1.0)
    }
}

impl Not for &Blade {
    type Output = Blade;
    fn not(self) -> Blade {
        self.conj()
    }
}

impl fmt::Display for Blade {
    /// `<coeff> e<i>^e<j>…`, coefficient rounded to 4 decimal places for
    /// display only; the stored value is untouched.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.coeff * 1e4).round() / 1e4;
        write!(f, "{}", rounded)?;
        for (n, e) in self.basis.iter().enumerate() {
            if n == 0 {
                write!(f, " e{}", e)?;
            } else {
                write!(f, "^e{}", e)?;
            }
        }
        Ok(())
    }
}
