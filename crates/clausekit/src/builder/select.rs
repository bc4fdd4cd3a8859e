use crate::clause::{ClauseKind, ClauseStore};
use crate::config::BuilderConfig;
use crate::error::{BuildResult, BuilderError, ensure_non_blank};
use crate::ident::Ident;
use crate::statement::Statement;

/// Fluent SELECT statement builder.
///
/// Mutations return `BuildResult<&mut Self>`, so calls chain with `?`.
/// Condition text and raw select code are inserted verbatim and never escaped.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    /// Accumulated fragments
    store: ClauseStore,
    /// Rendering options
    config: BuilderConfig,
    /// Result of the latest `render()`
    current: Option<Statement>,
}

impl QueryBuilder {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with a custom configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            store: ClauseStore::default(),
            config,
            current: None,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    // ==================== SELECT ====================

    /// Select every column (`*`), discarding previously selected columns.
    pub fn select_all(&mut self) -> &mut Self {
        self.store
            .replace(ClauseKind::Select, vec!["*".to_string()]);
        self
    }

    /// Append `` `table`.`column` ``.
    pub fn select_column(&mut self, table: &str, column: &str) -> BuildResult<&mut Self> {
        let fragment = self.column_fragment("select_column", table, column, None)?;
        self.store.push(ClauseKind::Select, fragment);
        Ok(self)
    }

    /// Append `` `table`.`column` alias ``.
    pub fn select_column_as(
        &mut self,
        table: &str,
        column: &str,
        alias: &str,
    ) -> BuildResult<&mut Self> {
        let fragment = self.column_fragment("select_column", table, column, Some(alias))?;
        self.store.push(ClauseKind::Select, fragment);
        Ok(self)
    }

    /// Append one column per element, as [`select_column`](Self::select_column)
    /// or [`select_column_as`](Self::select_column_as) would.
    ///
    /// `aliases` must have the same length as `columns`. Either every column
    /// is appended or none is.
    pub fn select_columns(
        &mut self,
        table: &str,
        columns: &[&str],
        aliases: &[Option<&str>],
    ) -> BuildResult<&mut Self> {
        if columns.len() != aliases.len() {
            let err = BuilderError::invalid_argument(format!(
                "select_columns: {} columns but {} aliases",
                columns.len(),
                aliases.len()
            ));
            crate::trace::rejected("select_columns", &err);
            return Err(err);
        }

        let fragments = columns
            .iter()
            .zip(aliases)
            .enumerate()
            .map(|(i, (column, alias))| {
                self.column_fragment("select_column", table, column, *alias)
                    .map_err(|e| BuilderError::composite("select_columns", i, e))
            })
            .collect::<BuildResult<Vec<_>>>()?;

        self.store.extend(ClauseKind::Select, fragments);
        Ok(self)
    }

    /// Append raw select code (e.g. `COUNT(*) AS total`) verbatim.
    ///
    /// The code is not quoted or escaped.
    pub fn select_function(&mut self, code: &str) -> BuildResult<&mut Self> {
        ensure_non_blank("select_function", "code", code)?;
        self.store.push(ClauseKind::Select, code.to_string());
        Ok(self)
    }

    fn column_fragment(
        &self,
        operation: &'static str,
        table: &str,
        column: &str,
        alias: Option<&str>,
    ) -> BuildResult<String> {
        let table = Ident::checked(operation, "table", table)?;
        let column = Ident::checked(operation, "column", column)?;
        let mut fragment = Ident::qualified_sql(&table, &column, self.config.quote);
        if let Some(alias) = alias {
            ensure_non_blank(operation, "alias", alias)?;
            fragment.push(' ');
            fragment.push_str(alias);
        }
        Ok(fragment)
    }

    // ==================== FROM / JOIN ====================

    /// Append `` `table` ``.
    pub fn from(&mut self, table: &str) -> BuildResult<&mut Self> {
        let fragment = self.table_fragment("from", table, None)?;
        self.store.push(ClauseKind::From, fragment);
        Ok(self)
    }

    /// Append `` `table` AS alias ``.
    pub fn from_as(&mut self, table: &str, alias: &str) -> BuildResult<&mut Self> {
        let fragment = self.table_fragment("from", table, Some(alias))?;
        self.store.push(ClauseKind::From, fragment);
        Ok(self)
    }

    /// Add INNER JOIN. Requires a prior [`from`](Self::from).
    pub fn inner_join(&mut self, table: &str, condition: &str) -> BuildResult<&mut Self> {
        self.join(ClauseKind::InnerJoin, "inner_join", "INNER JOIN", table, None, condition)
    }

    /// Add INNER JOIN with a table alias.
    pub fn inner_join_as(
        &mut self,
        table: &str,
        alias: &str,
        condition: &str,
    ) -> BuildResult<&mut Self> {
        self.join(ClauseKind::InnerJoin, "inner_join", "INNER JOIN", table, Some(alias), condition)
    }

    /// Add LEFT JOIN. Requires a prior [`from`](Self::from).
    pub fn left_join(&mut self, table: &str, condition: &str) -> BuildResult<&mut Self> {
        self.join(ClauseKind::LeftJoin, "left_join", "LEFT JOIN", table, None, condition)
    }

    /// Add LEFT JOIN with a table alias.
    pub fn left_join_as(
        &mut self,
        table: &str,
        alias: &str,
        condition: &str,
    ) -> BuildResult<&mut Self> {
        self.join(ClauseKind::LeftJoin, "left_join", "LEFT JOIN", table, Some(alias), condition)
    }

    /// Add RIGHT JOIN. Requires a prior [`from`](Self::from).
    pub fn right_join(&mut self, table: &str, condition: &str) -> BuildResult<&mut Self> {
        self.join(ClauseKind::RightJoin, "right_join", "RIGHT JOIN", table, None, condition)
    }

    /// Add RIGHT JOIN with a table alias.
    pub fn right_join_as(
        &mut self,
        table: &str,
        alias: &str,
        condition: &str,
    ) -> BuildResult<&mut Self> {
        self.join(ClauseKind::RightJoin, "right_join", "RIGHT JOIN", table, Some(alias), condition)
    }

    fn join(
        &mut self,
        kind: ClauseKind,
        operation: &'static str,
        keyword: &'static str,
        table: &str,
        alias: Option<&str>,
        condition: &str,
    ) -> BuildResult<&mut Self> {
        // Ordering defects are reported ahead of bad values.
        if !self.store.has(ClauseKind::From) {
            let err = BuilderError::precondition(format!(
                "{operation}: a FROM table must be declared before any JOIN"
            ));
            crate::trace::rejected(operation, &err);
            return Err(err);
        }
        let target = self.table_fragment(operation, table, alias)?;
        ensure_non_blank(operation, "condition", condition)?;

        self.store
            .push(kind, format!("{keyword} {target} ON {condition}"));
        Ok(self)
    }

    fn table_fragment(
        &self,
        operation: &'static str,
        table: &str,
        alias: Option<&str>,
    ) -> BuildResult<String> {
        let table = Ident::checked(operation, "table", table)?;
        let mut fragment = table.to_sql(self.config.quote);
        if let Some(alias) = alias {
            ensure_non_blank(operation, "alias", alias)?;
            fragment.push_str(" AS ");
            fragment.push_str(alias);
        }
        Ok(fragment)
    }

    // ==================== WHERE ====================

    /// Replace every WHERE condition with `condition`.
    ///
    /// The condition is inserted verbatim.
    pub fn where_clause(&mut self, condition: &str) -> BuildResult<&mut Self> {
        ensure_non_blank("where_clause", "condition", condition)?;
        self.store
            .replace(ClauseKind::Where, vec![condition.to_string()]);
        Ok(self)
    }

    /// Append `AND condition` (bare `condition` when WHERE is still empty).
    pub fn and_condition(&mut self, condition: &str) -> BuildResult<&mut Self> {
        ensure_non_blank("and_condition", "condition", condition)?;
        self.store.push_condition(ClauseKind::Where, "AND", condition);
        Ok(self)
    }

    /// Append `OR condition` (bare `condition` when WHERE is still empty).
    pub fn or_condition(&mut self, condition: &str) -> BuildResult<&mut Self> {
        ensure_non_blank("or_condition", "condition", condition)?;
        self.store.push_condition(ClauseKind::Where, "OR", condition);
        Ok(self)
    }

    // ==================== GROUP BY / HAVING / SORT BY ====================

    /// Append `` `column` `` to GROUP BY.
    pub fn group_by(&mut self, column: &str) -> BuildResult<&mut Self> {
        let column = Ident::checked("group_by", "column", column)?;
        self.store
            .push(ClauseKind::GroupBy, column.to_sql(self.config.quote));
        Ok(self)
    }

    /// Append `` `table`.`column` `` to GROUP BY.
    pub fn group_by_table_column(&mut self, table: &str, column: &str) -> BuildResult<&mut Self> {
        let fragment = self.column_fragment("group_by_table_column", table, column, None)?;
        self.store.push(ClauseKind::GroupBy, fragment);
        Ok(self)
    }

    /// Append a HAVING condition joined with `AND`.
    pub fn having(&mut self, condition: &str) -> BuildResult<&mut Self> {
        self.having_with(condition, "AND")
    }

    /// Append a HAVING condition joined with a caller-chosen connective.
    ///
    /// Both the condition and the connective are inserted verbatim.
    pub fn having_with(&mut self, condition: &str, connective: &str) -> BuildResult<&mut Self> {
        ensure_non_blank("having", "condition", condition)?;
        ensure_non_blank("having", "connective", connective)?;
        self.store
            .push_condition(ClauseKind::Having, connective, condition);
        Ok(self)
    }

    /// Append `` `column` `` to the sort segment.
    pub fn sort_by(&mut self, column: &str) -> BuildResult<&mut Self> {
        let column = Ident::checked("sort_by", "column", column)?;
        self.store
            .push(ClauseKind::SortBy, column.to_sql(self.config.quote));
        Ok(self)
    }

    /// Append `` `table`.`column` `` to the sort segment.
    pub fn sort_by_table_column(&mut self, table: &str, column: &str) -> BuildResult<&mut Self> {
        let fragment = self.column_fragment("sort_by_table_column", table, column, None)?;
        self.store.push(ClauseKind::SortBy, fragment);
        Ok(self)
    }

    // ==================== Inspection ====================

    /// Fragments accumulated for one clause kind, in insertion order.
    pub fn fragments(&self, kind: ClauseKind) -> &[String] {
        self.store.fragments(kind)
    }

    /// `true` when no clause has been declared.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drop every clause and the cached current query. The config is kept.
    pub fn clear(&mut self) -> &mut Self {
        self.store.clear();
        self.current = None;
        self
    }

    // ==================== SQL build ====================

    /// Render the statement without caching it.
    pub fn to_sql(&self) -> String {
        self.store.render(&self.config).0
    }

    /// Render the statement and remember it as the current query.
    pub fn render(&mut self) -> Statement {
        let (sql, segments) = self.store.render(&self.config);
        crate::trace::rendered(&self.config, segments, &sql);
        let statement = Statement::new(sql);
        self.current = Some(statement.clone());
        statement
    }

    /// The statement produced by the latest [`render`](Self::render), if any.
    pub fn current_query(&self) -> Option<&Statement> {
        self.current.as_ref()
    }
}
