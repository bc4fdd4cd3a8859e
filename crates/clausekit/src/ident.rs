//! SQL identifier quoting.
//!
//! [`Ident`] is a table or column name destined for a structural clause
//! (SELECT, FROM, JOIN target, GROUP BY, SORT BY). It is wrapped in the
//! configured delimiter when rendered.
//!
//! Only blankness is checked. The name is NOT escaped: a name containing the
//! delimiter (or any other character) is copied through as-is.
//!
//! # Example
//! ```
//! use clausekit::Ident;
//!
//! let t = Ident::new("users")?;
//! assert_eq!(t.to_sql('`'), "`users`");
//! # Ok::<(), clausekit::BuilderError>(())
//! ```

use crate::error::{BuildResult, ensure_non_blank};

/// A single, non-blank SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    name: String,
}

impl Ident {
    /// Create an identifier, rejecting blank names.
    pub fn new(name: &str) -> BuildResult<Self> {
        Self::checked("ident", "name", name)
    }

    /// Create an identifier, reporting failures against a builder operation.
    pub(crate) fn checked(
        operation: &'static str,
        argument: &'static str,
        name: &str,
    ) -> BuildResult<Self> {
        ensure_non_blank(operation, argument, name)?;
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// The raw, unquoted name.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Render the identifier wrapped in `quote`.
    pub fn to_sql(&self, quote: char) -> String {
        let mut out = String::with_capacity(self.name.len() + 2);
        self.write_sql(quote, &mut out);
        out
    }

    pub(crate) fn write_sql(&self, quote: char, out: &mut String) {
        out.push(quote);
        out.push_str(&self.name);
        out.push(quote);
    }

    /// Render `table.column`, each part quoted separately.
    pub fn qualified_sql(table: &Ident, column: &Ident, quote: char) -> String {
        let mut out = String::with_capacity(table.name.len() + column.name.len() + 5);
        table.write_sql(quote, &mut out);
        out.push('.');
        column.write_sql(quote, &mut out);
        out
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_backtick() {
        let ident = Ident::new("users").unwrap();
        assert_eq!(ident.to_sql('`'), "`users`");
    }

    #[test]
    fn ident_custom_quote() {
        let ident = Ident::new("users").unwrap();
        assert_eq!(ident.to_sql('"'), "\"users\"");
    }

    #[test]
    fn ident_qualified() {
        let t = Ident::new("users").unwrap();
        let c = Ident::new("id").unwrap();
        assert_eq!(Ident::qualified_sql(&t, &c, '`'), "`users`.`id`");
    }

    #[test]
    fn ident_is_not_escaped() {
        let ident = Ident::new("we`ird").unwrap();
        assert_eq!(ident.to_sql('`'), "`we`ird`");
    }

    #[test]
    fn ident_rejects_empty() {
        assert!(Ident::new("").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn ident_rejects_whitespace() {
        assert!(Ident::new(" \t ").is_err());
    }

    #[test]
    fn ident_accepts_any_non_blank_text() {
        let ident = Ident::new("a\0b").unwrap();
        assert_eq!(ident.to_sql('`'), "`a\0b`");
    }
}
