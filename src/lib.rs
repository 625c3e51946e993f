//! # gca Quickstart
//!
//! ```rust
//! use gca::prelude::*;
//!
//! // Unit basis vectors square to 1 under the inner product...
//! let e1 = Blade::vector(1.0, 1);
//! assert_eq!(e1.inner(&e1).coeff(), 1.0);
//!
//! // ...and vanish under the wedge with themselves.
//! assert_eq!(e1.outer(&e1).coeff(), 0.0);
//!
//! // (e1 + e2)(e1 - e2) = -2 e1^e2
//! let a = Multivector::from_components(&[1.0, 1.0]);
//! let b = Multivector::from_components(&[1.0, -1.0]);
//! assert_eq!(a.gp(&b).to_string(), "-2 e1^e2");
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod blade;
pub mod canonical;
pub mod dense;
pub mod error;
pub mod gen;
pub mod multivector;
pub mod prelude;
pub mod product;

// --- Public API exports ---

pub use blade::Blade;
pub use canonical::{prune, prune_with, EPSILON};
pub use error::GcaError;
pub use multivector::Multivector;
pub use product::{merge_bases, BasisProduct, ProductKind};
