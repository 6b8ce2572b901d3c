//! Boolean/text expression tree.
//!
//! Search definitions describe *what* to match as [`Expr`] values; executors
//! and renderers decide *how*. The node set is deliberately small: column
//! references, literals, text casts, NULL-safe concatenation, the
//! case-insensitive substring [`Expr::Match`], equality, and AND/OR.

use serde_json::Value;

/// A `table.column` reference. Table and column names are schema constants,
/// so they live as `&'static str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: &'static str,
    pub name: &'static str,
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.table, self.name)
    }
}

/// One node of a filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column(ColumnRef),
    Literal(Value),
    /// Render a scalar as text (`id::text`).
    Cast(Box<Expr>),
    /// String concatenation. NULL-contaminating, like SQL `||` — wrap parts
    /// in [`Expr::Coalesce`] (or use [`Expr::concat_ws`]) to avoid that.
    Concat(Vec<Expr>),
    Coalesce(Box<Expr>, Box<Expr>),
    /// Case-insensitive LIKE with `\` as the escape character. The pattern
    /// is a full LIKE pattern; wildcards the caller wants matched literally
    /// must already be escaped.
    Match { expr: Box<Expr>, pattern: String },
    Eq(Box<Expr>, Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn column(table: &'static str, name: &'static str) -> Self {
        Self::Column(ColumnRef { table, name })
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Literal(Value::String(value.into()))
    }

    pub fn value(value: Value) -> Self {
        Self::Literal(value)
    }

    pub fn as_text(self) -> Self {
        Self::Cast(Box::new(self))
    }

    pub fn coalesce(self, fallback: Expr) -> Self {
        Self::Coalesce(Box::new(self), Box::new(fallback))
    }

    pub fn matches(self, pattern: impl Into<String>) -> Self {
        Self::Match {
            expr: Box::new(self),
            pattern: pattern.into(),
        }
    }

    pub fn eq(self, other: Expr) -> Self {
        Self::Eq(Box::new(self), Box::new(other))
    }

    pub fn and(self, other: Expr) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Expr) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Space-separated concatenation with NULL-coalescing, the shape shared
    /// by every "full name" and address expression. Each part becomes
    /// `coalesce(part, '')`; single-space literals are interleaved so the
    /// result stays one filterable expression that can match a multi-word
    /// query spanning parts.
    pub fn concat_ws(parts: Vec<Expr>) -> Self {
        if parts.is_empty() {
            return Self::text("");
        }
        let mut out = Vec::with_capacity(parts.len() * 2 - 1);
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push(Self::text(" "));
            }
            out.push(part.coalesce(Self::text("")));
        }
        Self::Concat(out)
    }
}
