//! Set algebra over plain collections.
//!
//! This module provides stateless functions that take ordinary ordered
//! collections (anything implementing `IntoIterator`), treat them as sets,
//! and return a [`Set`](crate::Set), a `bool`, or an order-preserving `Vec`.
//!
//! - Binary operations: [`union`], [`intersection`], [`difference`],
//!   [`symmetric_difference`], [`is_disjoint`], [`is_subset`], [`is_superset`]
//! - N-ary folds: [`union_all`], [`intersection_all`],
//!   [`symmetric_difference_all`], [`unique_across_collections`]
//! - Membership and multiplicity: [`contains`], [`has_duplicates`]
//! - Filters: [`filter_allowed`], [`filter_disallowed`],
//!   [`deduplicate_preserving_order`], [`filter_multiples_preserving_order`]
//!
//! The n-ary folds are built on the combining wrappers [`Union`],
//! [`Intersection`] and [`SymmetricDifference`].
//!
//! # Examples
//!
//! ```rust
//! use setalgebra::Set;
//! use setalgebra::algebra::{self, OrderPolicy};
//!
//! let customers_a = ["ana", "luis", "sofia"];
//! let customers_b = ["luis", "sofia", "mateo"];
//!
//! assert_eq!(
//!     algebra::intersection(customers_a, customers_b),
//!     Set::from(["luis", "sofia"])
//! );
//!
//! let blocked = ["luis"];
//! assert_eq!(
//!     algebra::filter_disallowed(customers_a, blocked, OrderPolicy::Preserve),
//!     vec!["ana", "sofia"]
//! );
//! ```

mod combine;
mod filter;
mod operations;

pub use combine::{Intersection, SymmetricDifference, Union};
pub use filter::{
    OrderPolicy, deduplicate_preserving_order, filter_allowed, filter_disallowed,
    filter_multiples_preserving_order,
};
pub use operations::{
    contains, difference, has_duplicates, intersection, intersection_all, is_disjoint, is_subset,
    is_superset, symmetric_difference, symmetric_difference_all, union, union_all,
    unique_across_collections,
};
