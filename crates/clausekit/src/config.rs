//! Rendering configuration.

/// Keyword used for the sort segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortKeyword {
    /// `SORT BY` (the historical output of this builder).
    #[default]
    SortBy,
    /// Standard SQL `ORDER BY`.
    OrderBy,
}

impl SortKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKeyword::SortBy => "SORT BY",
            SortKeyword::OrderBy => "ORDER BY",
        }
    }
}

/// Relative position of the sort and HAVING segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClauseOrder {
    /// `... GROUP BY, SORT BY, HAVING` (the historical output of this builder).
    #[default]
    SortBeforeHaving,
    /// `... GROUP BY, HAVING, ORDER BY` as standard SQL requires.
    Standard,
}

/// Spacing between the column list and `VALUES` in INSERT statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InsertSpacing {
    /// `(a, b)VALUES (...)`, byte-compatible with existing consumers.
    #[default]
    Compat,
    /// `(a, b) VALUES (...)`.
    Spaced,
}

/// Configuration for rendering statements.
///
/// The defaults reproduce the historical output exactly. Use
/// [`BuilderConfig::standard`] for standard SQL ordering and keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    /// Identifier delimiter for structural clauses.
    pub quote: char,
    /// Statement terminator.
    pub terminator: String,
    /// Keyword for the sort segment.
    pub sort_keyword: SortKeyword,
    /// Position of the sort segment relative to HAVING.
    pub clause_order: ClauseOrder,
    /// Spacing before `VALUES` in the INSERT helper.
    pub insert_spacing: InsertSpacing,
    /// Truncate SQL in `tracing` events (in bytes). `None` means no truncation.
    pub log_max_sql_length: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            quote: '`',
            terminator: ";".to_string(),
            sort_keyword: SortKeyword::default(),
            clause_order: ClauseOrder::default(),
            insert_spacing: InsertSpacing::default(),
            log_max_sql_length: Some(200),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard SQL preset: `ORDER BY` after `HAVING`, spaced INSERT.
    pub fn standard() -> Self {
        Self::default()
            .with_sort_keyword(SortKeyword::OrderBy)
            .with_clause_order(ClauseOrder::Standard)
            .with_insert_spacing(InsertSpacing::Spaced)
    }

    /// Set the identifier delimiter.
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set the statement terminator. An empty string disables it.
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    pub fn with_sort_keyword(mut self, keyword: SortKeyword) -> Self {
        self.sort_keyword = keyword;
        self
    }

    pub fn with_clause_order(mut self, order: ClauseOrder) -> Self {
        self.clause_order = order;
        self
    }

    pub fn with_insert_spacing(mut self, spacing: InsertSpacing) -> Self {
        self.insert_spacing = spacing;
        self
    }

    /// Set maximum SQL length in log events.
    pub fn with_log_max_sql_length(mut self, len: usize) -> Self {
        self.log_max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in log events.
    pub fn no_log_truncate(mut self) -> Self {
        self.log_max_sql_length = None;
        self
    }
}
