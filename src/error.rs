//! Error taxonomy for blade and multivector operations.
//!
//! Products, sums, and scaling are total and return plain values; only
//! division (and inversion, which divides by a magnitude) and blade
//! construction can fail.

use thiserror::Error;

/// Errors surfaced by fallible algebra operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GcaError {
    /// Scalar division by zero, or inverse/division of an operand whose
    /// magnitude is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A blade basis contained a repeated or zero index. Basis indices
    /// are 1-based and must be distinct.
    #[error("malformed basis: index {index} is repeated or zero")]
    MalformedBasis {
        /// The offending basis index.
        index: u32,
    },
}
