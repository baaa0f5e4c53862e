//! # setalgebra
//!
//! Set-theoretic operations over ordinary collections, and the list filters
//! built on them.
//!
//! ## Overview
//!
//! - **[`Set`]**: unordered collection of unique elements
//! - **[`algebra`]**: union, intersection, difference and symmetric
//!   difference over any number of collections; subset, superset and
//!   disjointness checks; order-preserving filters and deduplication
//! - **[`typeclass`]**: `Semigroup` and `Monoid`, the folds behind the
//!   n-ary operations
//!
//! ## Feature Flags
//!
//! - `fxhash`: hash elements with `rustc-hash`
//! - `ahash`: hash elements with `ahash`
//! - `serde`: `Serialize`/`Deserialize` for [`Set`]
//! - `full`: Enable all non-hasher features
//!
//! ## Example
//!
//! ```rust
//! use setalgebra::prelude::*;
//!
//! let a = [1, 2, 3];
//! let b = [3, 4, 5];
//!
//! assert_eq!(union(a, b), Set::from([1, 2, 3, 4, 5]));
//! assert_eq!(intersection(a, b), Set::from([3]));
//! assert_eq!(difference(a, b), Set::from([1, 2]));
//! assert_eq!(symmetric_difference(a, b), Set::from([1, 2, 4, 5]));
//! assert!(!is_disjoint(a, b));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use setalgebra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::error::SetAlgebraError;
    pub use crate::set::Set;
    pub use crate::typeclass::*;
}

pub mod algebra;
pub mod typeclass;

mod error;
mod set;

pub use error::{Result, SetAlgebraError};
pub use set::{ElementHasher, Set, SetIntoIterator, SetIterator};
