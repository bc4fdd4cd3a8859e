//! Convenient imports for typical `clausekit` usage.
//!
//! ```
//! use clausekit::prelude::*;
//! ```

pub use crate::{
    BuildResult, BuilderConfig, BuilderError, ClauseKind, ClauseOrder, Ident, InsertSpacing,
    QueryBuilder, SharedQueryBuilder, SortKeyword, Statement, build_insert, build_insert_with,
};
