//! # clausekit
//!
//! A small, deterministic SQL SELECT statement assembler.
//!
//! ## Features
//!
//! - **Fluent**: every mutation returns the builder, so clauses chain with `?`
//! - **Fixed order**: clauses may be declared in any order, rendering always
//!   emits SELECT, FROM + JOINs, WHERE, GROUP BY, SORT BY, HAVING
//! - **Validated up front**: blank inputs and JOIN-before-FROM are rejected
//!   before the builder is touched
//! - **Re-renderable**: rendering never consumes the builder
//!
//! ## No escaping
//!
//! Identifiers (tables, columns) are wrapped in backticks, but nothing is ever
//! escaped. Condition text (`where_clause`, `and_condition`, `or_condition`,
//! `having`, join conditions), raw select code (`select_function`) and the
//! INSERT helper's columns and values are copied into the statement verbatim.
//! Callers must sanitize anything that did not come from trusted code.
//!
//! ## Example
//!
//! ```
//! use clausekit::QueryBuilder;
//!
//! let mut qb = QueryBuilder::new();
//! qb.select_column("users", "id")?
//!     .select_column_as("users", "name", "n")?
//!     .from("users")?
//!     .where_clause("id > 5")?
//!     .group_by("name")?;
//!
//! assert_eq!(
//!     qb.render().as_str(),
//!     "SELECT `users`.`id`, `users`.`name` n FROM `users` WHERE id > 5 GROUP BY `name`;"
//! );
//! # Ok::<(), clausekit::BuilderError>(())
//! ```

pub mod builder;
pub mod clause;
pub mod config;
pub mod error;
pub mod ident;
pub mod prelude;
pub mod statement;

mod trace;

pub use builder::{QueryBuilder, SharedQueryBuilder, build_insert, build_insert_with};
pub use clause::ClauseKind;
pub use config::{BuilderConfig, ClauseOrder, InsertSpacing, SortKeyword};
pub use error::{BuildResult, BuilderError};
pub use ident::Ident;
pub use statement::Statement;
