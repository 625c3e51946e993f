// src/prelude.rs
//! The "everything" import for gca.
//!
//! Brings you the most commonly used types and functions with one glob:
//! ```rust
//! use gca::prelude::*;
//! ```

// core data types
pub use crate::blade::Blade;
pub use crate::error::GcaError;
pub use crate::multivector::Multivector;

// product engine and canonicalizer
pub use crate::canonical::{prune, prune_with, EPSILON};
pub use crate::product::{merge_bases, BasisProduct, ProductKind};
