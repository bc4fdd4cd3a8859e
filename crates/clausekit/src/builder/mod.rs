//! Statement builders.
//!
//! ## Design
//!
//! - Clauses are accumulated as already-formatted fragments, one ordered list
//!   per [`ClauseKind`](crate::ClauseKind).
//! - Every input is validated before the builder is touched, so a failed call
//!   leaves it unchanged.
//! - Rendering is a pure function of the accumulated fragments and can be
//!   repeated at any time.

pub mod insert;
pub mod select;
pub mod shared;

pub use insert::{build_insert, build_insert_with};
pub use select::QueryBuilder;
pub use shared::SharedQueryBuilder;
