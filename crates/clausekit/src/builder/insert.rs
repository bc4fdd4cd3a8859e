//! Standalone single-row INSERT helper.
//!
//! Independent of [`QueryBuilder`](super::QueryBuilder): it never reads or
//! touches a clause store.

use crate::config::{BuilderConfig, InsertSpacing};
use crate::statement::Statement;

/// Build `` INSERT INTO `table` (c1, c2)VALUES (v1, v2); ``.
///
/// Columns and values are pre-formatted by the caller and joined with `, `
/// verbatim. Nothing is validated, quoted or escaped: string values must
/// already carry their own quotes.
///
/// The missing space before `VALUES` is kept for byte compatibility with
/// existing consumers; see [`build_insert_with`] and
/// [`InsertSpacing::Spaced`] to change it.
///
/// # Example
/// ```
/// let stmt = clausekit::build_insert("t", &["a", "b"], &["1", "'x'"]);
/// assert_eq!(stmt.as_str(), "INSERT INTO `t` (a, b)VALUES (1, 'x');");
/// ```
pub fn build_insert<C, V>(table: &str, columns: &[C], values: &[V]) -> Statement
where
    C: AsRef<str>,
    V: AsRef<str>,
{
    build_insert_with(&BuilderConfig::default(), table, columns, values)
}

/// [`build_insert`] with explicit quoting, terminator and spacing.
pub fn build_insert_with<C, V>(
    config: &BuilderConfig,
    table: &str,
    columns: &[C],
    values: &[V],
) -> Statement
where
    C: AsRef<str>,
    V: AsRef<str>,
{
    let quote = config.quote;
    let spacing = match config.insert_spacing {
        InsertSpacing::Compat => "",
        InsertSpacing::Spaced => " ",
    };
    let sql = format!(
        "INSERT INTO {quote}{table}{quote} ({}){spacing}VALUES ({}){}",
        join(columns),
        join(values),
        config.terminator
    );
    Statement::new(sql)
}

fn join<S: AsRef<str>>(parts: &[S]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(part.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_compat_spacing() {
        let stmt = build_insert("t", &["a", "b"], &["1", "'x'"]);
        assert_eq!(stmt, "INSERT INTO `t` (a, b)VALUES (1, 'x');");
    }

    #[test]
    fn insert_spaced() {
        let config = BuilderConfig::standard();
        let stmt = build_insert_with(&config, "t", &["a"], &["1"]);
        assert_eq!(stmt, "INSERT INTO `t` (a) VALUES (1);");
    }

    #[test]
    fn insert_accepts_owned_strings() {
        let columns = vec!["id".to_string(), "name".to_string()];
        let values = vec![42.to_string(), "'bob'".to_string()];
        let stmt = build_insert("users", columns.as_slice(), values.as_slice());
        assert_eq!(
            stmt.as_str(),
            "INSERT INTO `users` (id, name)VALUES (42, 'bob');"
        );
    }

    #[test]
    fn insert_does_not_validate() {
        let stmt = build_insert::<&str, &str>("", &[], &[]);
        assert_eq!(stmt, "INSERT INTO `` ()VALUES ();");
    }

    #[test]
    fn insert_does_not_escape_values() {
        let stmt = build_insert("t", &["a"], &["'it''s'"]);
        assert_eq!(stmt, "INSERT INTO `t` (a)VALUES ('it''s');");
    }
}
