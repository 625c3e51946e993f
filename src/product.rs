//! The blade product engine.
//!
//! Multiplying two basis blades reduces to merging their ascending index
//! lists while tracking the sign picked up from anticommutation
//! (`e_i e_j = -e_j e_i` for distinct basis vectors) and, for the inner
//! product, from contracting shared basis vectors (`e_i e_i = 1`).
//! `merge_bases` does exactly that in one pass; the blade types interpret
//! its output.

/// Which product the basis merge is computing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProductKind {
    /// Inner product: shared basis vectors contract to 1; the product is
    /// zero when the operands share no basis vector.
    Contracting,
    /// Outer (wedge) product: the product is zero whenever the operands
    /// share a basis vector.
    Extending,
}

/// Outcome of merging two blade bases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasisProduct {
    /// Merged basis, ascending. Empty when the product contracted down
    /// to a scalar or vanished entirely; `common` disambiguates.
    pub basis: Vec<u32>,
    /// Accumulated sign, `+1` or `-1`.
    pub sign: i32,
    /// Whether the operands shared at least one basis vector.
    pub common: bool,
}

/// Merge two ascending, duplicate-free bases, accumulating the
/// anticommutation sign.
///
/// Two-pointer merge, the same shape as a merge-sort merge step.
/// `remaining_a` counts the `a` elements not yet emitted; emitting a `b`
/// element first means commuting it past all of them, which flips the
/// sign when their count is odd. A shared index in `Contracting` mode
/// contracts away after the transpositions that bring the pair adjacent;
/// in `Extending` mode it zeroes the whole product.
///
/// Runs in O(|a| + |b|) with a single output allocation.
pub fn merge_bases(a: &[u32], b: &[u32], kind: ProductKind) -> BasisProduct {
    let mut basis = Vec::with_capacity(a.len() + b.len());
    let mut sign = 1i32;
    let mut common = false;
    let mut remaining_a = a.len();

    let mut i = 0;
    let mut j = 0;
    loop {
        if i == a.len() {
            basis.extend_from_slice(&b[j..]);
            break;
        }
        if j == b.len() {
            basis.extend_from_slice(&a[i..]);
            break;
        }
        if a[i] < b[j] {
            basis.push(a[i]);
            i += 1;
            remaining_a -= 1;
        } else if b[j] < a[i] {
            if remaining_a % 2 == 1 {
                sign = -sign;
            }
            basis.push(b[j]);
            j += 1;
        } else {
            common = true;
            if kind == ProductKind::Extending {
                basis.clear();
                break;
            }
            // Bringing the shared pair adjacent costs one transposition
            // per a-element still ahead of it, then e_i e_i contracts to 1.
            remaining_a -= 1;
            if remaining_a % 2 == 1 {
                sign = -sign;
            }
            i += 1;
            j += 1;
        }
    }

    // Orthogonal blades have zero inner product.
    if kind == ProductKind::Contracting && !common {
        basis.clear();
    }

    BasisProduct { basis, sign, common }
}
