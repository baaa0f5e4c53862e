//! Algebraic structure traits.
//!
//! - [`Semigroup`]: Types with an associative binary operation (`combine`)
//! - [`Monoid`]: Semigroups with an identity element (`empty`)
//!
//! Sets admit more than one lawful combining operation, so the set
//! instances live on the newtype wrappers in [`crate::algebra`]
//! ([`Union`](crate::algebra::Union),
//! [`Intersection`](crate::algebra::Intersection),
//! [`SymmetricDifference`](crate::algebra::SymmetricDifference)).
//! A bare [`Set`](crate::Set) combines by union.

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
