//! `tracing` events for rendering and rejected calls.
//!
//! Enable via the crate feature: `clausekit = { features = ["tracing"] }`.
//! Without it every hook compiles to nothing.

use crate::config::BuilderConfig;
use crate::error::BuilderError;

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(feature = "tracing")]
pub(crate) fn rendered(config: &BuilderConfig, segments: usize, sql: &str) {
    let shown = match config.log_max_sql_length {
        Some(max) if sql.len() > max => {
            std::borrow::Cow::Owned(format!("{}...", truncate_sql_bytes(sql, max)))
        }
        _ => std::borrow::Cow::Borrowed(sql),
    };
    tracing::debug!(target: "clausekit.sql", segments, sql = %shown, "rendered statement");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn rendered(_config: &BuilderConfig, _segments: usize, _sql: &str) {}

#[cfg(feature = "tracing")]
pub(crate) fn rejected(operation: &'static str, err: &BuilderError) {
    tracing::trace!(target: "clausekit.sql", operation, error = %err, "rejected clause");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn rejected(_operation: &'static str, _err: &BuilderError) {}
