//! The clause store: one ordered fragment list per clause kind.
//!
//! The set of kinds is closed. Rendering walks them in a fixed order and
//! emits one segment per non-empty kind.

use crate::config::{BuilderConfig, ClauseOrder};
use std::fmt;

/// One of the nine fixed categories of SQL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClauseKind {
    Select,
    From,
    InnerJoin,
    LeftJoin,
    RightJoin,
    Where,
    GroupBy,
    Having,
    SortBy,
}

impl ClauseKind {
    /// Every kind, in declaration order.
    pub const ALL: [ClauseKind; 9] = [
        ClauseKind::Select,
        ClauseKind::From,
        ClauseKind::InnerJoin,
        ClauseKind::LeftJoin,
        ClauseKind::RightJoin,
        ClauseKind::Where,
        ClauseKind::GroupBy,
        ClauseKind::Having,
        ClauseKind::SortBy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseKind::Select => "select",
            ClauseKind::From => "from",
            ClauseKind::InnerJoin => "inner_join",
            ClauseKind::LeftJoin => "left_join",
            ClauseKind::RightJoin => "right_join",
            ClauseKind::Where => "where",
            ClauseKind::GroupBy => "group_by",
            ClauseKind::Having => "having",
            ClauseKind::SortBy => "sort_by",
        }
    }

    /// Keyword prefixing this kind's segment. Join fragments carry their own.
    fn keyword(&self, config: &BuilderConfig) -> Option<&'static str> {
        match self {
            ClauseKind::Select => Some("SELECT"),
            ClauseKind::From => Some("FROM"),
            ClauseKind::InnerJoin | ClauseKind::LeftJoin | ClauseKind::RightJoin => None,
            ClauseKind::Where => Some("WHERE"),
            ClauseKind::GroupBy => Some("GROUP BY"),
            ClauseKind::Having => Some("HAVING"),
            ClauseKind::SortBy => Some(config.sort_keyword.as_str()),
        }
    }

    /// Separator between fragments of this kind.
    ///
    /// Condition kinds carry their connectives inside the fragments.
    fn separator(&self) -> &'static str {
        match self {
            ClauseKind::Select | ClauseKind::From | ClauseKind::GroupBy | ClauseKind::SortBy => {
                ", "
            }
            ClauseKind::InnerJoin
            | ClauseKind::LeftJoin
            | ClauseKind::RightJoin
            | ClauseKind::Where
            | ClauseKind::Having => " ",
        }
    }

    fn is_join(&self) -> bool {
        matches!(
            self,
            ClauseKind::InnerJoin | ClauseKind::LeftJoin | ClauseKind::RightJoin
        )
    }

    fn index(self) -> usize {
        self as usize
    }

    /// The order segments are rendered in.
    fn render_order(order: ClauseOrder) -> [ClauseKind; 9] {
        use ClauseKind::*;
        match order {
            ClauseOrder::SortBeforeHaving => [
                Select, From, InnerJoin, LeftJoin, RightJoin, Where, GroupBy, SortBy, Having,
            ],
            ClauseOrder::Standard => [
                Select, From, InnerJoin, LeftJoin, RightJoin, Where, GroupBy, Having, SortBy,
            ],
        }
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered fragments for every clause kind.
///
/// Fragments are stored already formatted; the store itself never validates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ClauseStore {
    slots: [Vec<String>; 9],
}

impl ClauseStore {
    pub(crate) fn fragments(&self, kind: ClauseKind) -> &[String] {
        &self.slots[kind.index()]
    }

    pub(crate) fn has(&self, kind: ClauseKind) -> bool {
        !self.slots[kind.index()].is_empty()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    pub(crate) fn push(&mut self, kind: ClauseKind, fragment: String) {
        self.slots[kind.index()].push(fragment);
    }

    pub(crate) fn extend(&mut self, kind: ClauseKind, fragments: Vec<String>) {
        self.slots[kind.index()].extend(fragments);
    }

    /// Replace a kind's fragments wholesale.
    pub(crate) fn replace(&mut self, kind: ClauseKind, fragments: Vec<String>) {
        self.slots[kind.index()] = fragments;
    }

    /// Append a condition, prefixed with `connective` unless the kind is empty.
    pub(crate) fn push_condition(&mut self, kind: ClauseKind, connective: &str, condition: &str) {
        let slot = &mut self.slots[kind.index()];
        if slot.is_empty() {
            slot.push(condition.to_string());
        } else {
            slot.push(format!("{connective} {condition}"));
        }
    }

    pub(crate) fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Build the segments of the statement, omitting empty kinds.
    pub(crate) fn segments(&self, config: &BuilderConfig) -> Vec<String> {
        let has_from = self.has(ClauseKind::From);
        let mut segments = Vec::with_capacity(9);

        for kind in ClauseKind::render_order(config.clause_order) {
            let fragments = self.fragments(kind);
            if fragments.is_empty() || (kind.is_join() && !has_from) {
                continue;
            }
            let body = fragments.join(kind.separator());
            match kind.keyword(config) {
                Some(keyword) => segments.push(format!("{keyword} {body}")),
                None => segments.push(body),
            }
        }

        segments
    }

    /// Assemble the full statement text, including the terminator.
    pub(crate) fn render(&self, config: &BuilderConfig) -> (String, usize) {
        let segments = self.segments(config);
        let mut sql = segments.join(" ");
        sql.push_str(&config.terminator);
        (sql, segments.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ClauseStore {
        let mut store = ClauseStore::default();
        store.push(ClauseKind::Select, "*".to_string());
        store.push(ClauseKind::From, "`t`".to_string());
        store
    }

    #[test]
    fn kinds_are_closed_and_named() {
        assert_eq!(ClauseKind::ALL.len(), 9);
        for (i, kind) in ClauseKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(ClauseKind::GroupBy.to_string(), "group_by");
    }

    #[test]
    fn empty_store_renders_terminator_only() {
        let (sql, n) = ClauseStore::default().render(&BuilderConfig::default());
        assert_eq!(sql, ";");
        assert_eq!(n, 0);
    }

    #[test]
    fn push_condition_prefixes_only_when_non_empty() {
        let mut store = ClauseStore::default();
        store.push_condition(ClauseKind::Where, "AND", "a = 1");
        store.push_condition(ClauseKind::Where, "OR", "b = 2");
        assert_eq!(store.fragments(ClauseKind::Where), ["a = 1", "OR b = 2"]);
    }

    #[test]
    fn replace_discards_previous() {
        let mut store = ClauseStore::default();
        store.push(ClauseKind::Where, "a = 1".to_string());
        store.replace(ClauseKind::Where, vec!["b = 2".to_string()]);
        assert_eq!(store.fragments(ClauseKind::Where), ["b = 2"]);
    }

    #[test]
    fn sort_renders_before_having_by_default() {
        let mut store = store();
        store.push(ClauseKind::Having, "COUNT(*) > 1".to_string());
        store.push(ClauseKind::SortBy, "`a`".to_string());
        let (sql, n) = store.render(&BuilderConfig::default());
        assert_eq!(sql, "SELECT * FROM `t` SORT BY `a` HAVING COUNT(*) > 1;");
        assert_eq!(n, 4);
    }

    #[test]
    fn standard_order_puts_having_first() {
        let mut store = store();
        store.push(ClauseKind::Having, "COUNT(*) > 1".to_string());
        store.push(ClauseKind::SortBy, "`a`".to_string());
        let (sql, _) = store.render(&BuilderConfig::standard());
        assert_eq!(sql, "SELECT * FROM `t` HAVING COUNT(*) > 1 ORDER BY `a`;");
    }

    #[test]
    fn joins_follow_from_in_fixed_order() {
        let mut store = store();
        store.push(ClauseKind::RightJoin, "RIGHT JOIN `r` ON x".to_string());
        store.push(ClauseKind::LeftJoin, "LEFT JOIN `l` ON y".to_string());
        store.push(ClauseKind::InnerJoin, "INNER JOIN `i` ON z".to_string());
        store.push(ClauseKind::InnerJoin, "INNER JOIN `j` ON w".to_string());
        let segments = store.segments(&BuilderConfig::default());
        assert_eq!(
            segments,
            [
                "SELECT *",
                "FROM `t`",
                "INNER JOIN `i` ON z INNER JOIN `j` ON w",
                "LEFT JOIN `l` ON y",
                "RIGHT JOIN `r` ON x",
            ]
        );
    }

    #[test]
    fn clear_empties_every_kind() {
        let mut store = store();
        assert!(!store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }
}
