//! In-memory scope executor.
//!
//! [`Dataset`] pairs a [`Schema`] with JSON rows and materialises a
//! [`Scope`] against them with relational semantics: outer joins fan out or
//! preserve base rows, NULL propagates three-valued through predicates, and
//! `distinct` collapses fan-out back to one row per base row. It backs the
//! test suites and small embedded deployments; production traffic goes
//! through the SQL rendering instead.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::error::{QueryError, Result};
use crate::expr::Expr;
use crate::like::like_match;
use crate::schema::Schema;
use crate::scope::Scope;

/// One stored row: a JSON object's members.
pub type Row = serde_json::Map<String, Value>;

/// A joined tuple during execution: per-table row slots, `None` when the
/// outer join found no related row.
type Tuple<'a> = HashMap<&'static str, Option<&'a Row>>;

/// A schema plus rows, queryable through [`Dataset::run`].
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    schema: Schema,
    rows: HashMap<&'static str, Vec<Row>>,
}

impl Dataset {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            rows: HashMap::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Store a row. The value must be a JSON object and the table must be
    /// declared in the schema.
    pub fn insert(&mut self, table: &'static str, row: Value) -> Result<()> {
        if !self.schema.has_table(table) {
            return Err(QueryError::UnknownTable(table.to_string()));
        }
        match row {
            Value::Object(map) => {
                self.rows.entry(table).or_default().push(map);
                Ok(())
            }
            other => Err(QueryError::InvalidRow(other.to_string())),
        }
    }

    /// Materialise a scope: join, filter, deduplicate, cap. Returns base-table
    /// rows — one per passing joined tuple, unless the scope is distinct.
    pub fn run(&self, scope: &Scope) -> Result<Vec<Row>> {
        let base = scope.base();
        if !self.schema.has_table(base) {
            return Err(QueryError::UnknownTable(base.to_string()));
        }

        let empty = Vec::new();
        let base_rows = self.rows.get(base).unwrap_or(&empty);
        let mut tuples: Vec<Tuple<'_>> = base_rows
            .iter()
            .map(|row| Tuple::from([(base, Some(row))]))
            .collect();

        for path in scope.joins() {
            let mut current = base;
            for segment in path {
                let relation = self.schema.relation_of(current, segment)?;
                let target_rows = self.rows.get(relation.target).unwrap_or(&empty);
                let mut joined = Vec::with_capacity(tuples.len());
                for tuple in tuples {
                    let matches: Vec<&Row> = match tuple.get(current).copied().flatten() {
                        Some(parent) => {
                            let key = parent.get(relation.local_key).unwrap_or(&Value::Null);
                            if key.is_null() {
                                Vec::new()
                            } else {
                                target_rows
                                    .iter()
                                    .filter(|row| row.get(relation.foreign_key) == Some(key))
                                    .collect()
                            }
                        }
                        None => Vec::new(),
                    };
                    if matches.is_empty() {
                        let mut preserved = tuple.clone();
                        preserved.insert(relation.target, None);
                        joined.push(preserved);
                    } else {
                        for row in matches {
                            let mut expanded = tuple.clone();
                            expanded.insert(relation.target, Some(row));
                            joined.push(expanded);
                        }
                    }
                }
                tuples = joined;
                current = relation.target;
            }
        }

        let mut out = Vec::new();
        let mut seen = HashSet::new();
        for tuple in &tuples {
            if let Some(limit) = scope.row_limit() {
                if out.len() >= limit {
                    break;
                }
            }
            if let Some(predicate) = scope.predicate() {
                if truth(&eval(predicate, tuple)?) != Some(true) {
                    continue;
                }
            }
            let row = tuple
                .get(base)
                .copied()
                .flatten()
                .ok_or_else(|| QueryError::TableNotJoined(base.to_string()))?;
            if scope.is_distinct() && !seen.insert(identity(row)) {
                continue;
            }
            out.push(row.clone());
        }
        Ok(out)
    }
}

/// Base-row identity for distinct: the `id` column when present, the whole
/// row otherwise.
fn identity(row: &Row) -> String {
    match row.get("id") {
        Some(id) if !id.is_null() => id.to_string(),
        _ => Value::Object(row.clone()).to_string(),
    }
}

fn eval(expr: &Expr, tuple: &Tuple<'_>) -> Result<Value> {
    match expr {
        Expr::Column(column) => {
            let slot = tuple
                .get(column.table)
                .ok_or_else(|| QueryError::TableNotJoined(column.table.to_string()))?;
            Ok(match slot {
                Some(row) => row.get(column.name).cloned().unwrap_or(Value::Null),
                None => Value::Null,
            })
        }
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Cast(inner) => Ok(match text_of(eval(inner, tuple)?) {
            Some(text) => Value::String(text),
            None => Value::Null,
        }),
        Expr::Concat(parts) => {
            let mut out = String::new();
            for part in parts {
                match text_of(eval(part, tuple)?) {
                    Some(text) => out.push_str(&text),
                    None => return Ok(Value::Null),
                }
            }
            Ok(Value::String(out))
        }
        Expr::Coalesce(value, fallback) => {
            let value = eval(value, tuple)?;
            if value.is_null() {
                eval(fallback, tuple)
            } else {
                Ok(value)
            }
        }
        Expr::Match { expr, pattern } => Ok(match text_of(eval(expr, tuple)?) {
            Some(text) => Value::Bool(like_match(pattern, &text)),
            None => Value::Null,
        }),
        Expr::Eq(left, right) => {
            let left = eval(left, tuple)?;
            let right = eval(right, tuple)?;
            Ok(if left.is_null() || right.is_null() {
                Value::Null
            } else {
                Value::Bool(left == right)
            })
        }
        Expr::And(left, right) => {
            let left = truth(&eval(left, tuple)?);
            let right = truth(&eval(right, tuple)?);
            Ok(match (left, right) {
                (Some(false), _) | (_, Some(false)) => Value::Bool(false),
                (Some(true), Some(true)) => Value::Bool(true),
                _ => Value::Null,
            })
        }
        Expr::Or(left, right) => {
            let left = truth(&eval(left, tuple)?);
            let right = truth(&eval(right, tuple)?);
            Ok(match (left, right) {
                (Some(true), _) | (_, Some(true)) => Value::Bool(true),
                (Some(false), Some(false)) => Value::Bool(false),
                _ => Value::Null,
            })
        }
    }
}

/// SQL-ish truth: NULL is unknown, non-boolean scalars are not true.
fn truth(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        _ => Some(false),
    }
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
