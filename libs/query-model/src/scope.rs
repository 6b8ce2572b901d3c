//! Lazy query plans.
//!
//! A [`Scope`] is the collection handle that flows through search: callers
//! hand one in already narrowed to what the request may see, definitions add
//! joins and a filter, and the caller materialises the result. Every method
//! is a pure value transformation; nothing here performs I/O.

use crate::expr::Expr;

/// An ordered relation path from a scope's base table, e.g.
/// `["owners", "contact"]`.
pub type JoinPath = Vec<&'static str>;

/// An immutable, lazy query plan over one base table.
#[derive(Debug, Clone, PartialEq)]
pub struct Scope {
    base: &'static str,
    joins: Vec<JoinPath>,
    distinct: bool,
    predicate: Option<Expr>,
    limit: Option<usize>,
}

impl Scope {
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            joins: Vec::new(),
            distinct: false,
            predicate: None,
            limit: None,
        }
    }

    /// Add an outer-join path. Rows lacking the related row remain
    /// candidates (their joined columns are NULL). Repeating an
    /// already-added path is a no-op.
    pub fn left_join(mut self, path: &[&'static str]) -> Self {
        if !path.is_empty() && !self.joins.iter().any(|p| p == path) {
            self.joins.push(path.to_vec());
        }
        self
    }

    /// Deduplicate result rows by base-row identity.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Narrow the scope. Successive filters AND-merge, so a search filter
    /// composes with whatever narrowing the caller already applied.
    pub fn filter(mut self, expr: Expr) -> Self {
        self.predicate = Some(match self.predicate {
            Some(existing) => existing.and(expr),
            None => expr,
        });
        self
    }

    /// Cap the number of materialised rows.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn joins(&self) -> &[JoinPath] {
        &self.joins
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn predicate(&self) -> Option<&Expr> {
        self.predicate.as_ref()
    }

    pub fn row_limit(&self) -> Option<usize> {
        self.limit
    }
}
