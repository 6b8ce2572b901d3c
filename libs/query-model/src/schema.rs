//! Table and relation metadata.
//!
//! A [`Schema`] names the tables a deployment exposes to search and the
//! relations between them. Relations are what join paths in a
//! [`Scope`](crate::Scope) resolve against; both the in-memory executor and
//! the SQL renderer derive their join conditions from here.

use std::collections::HashMap;

use crate::error::{QueryError, Result};

/// Cardinality of a relation, as declared by the owning side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// At most one related row (`belongs_to` / `has_one`).
    One,
    /// Any number of related rows; joining through it can fan out the base
    /// row, which is why some search definitions require distinct.
    Many,
}

/// A named edge from one table to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub kind: RelationKind,
    pub target: &'static str,
    /// Key column on the owning table.
    pub local_key: &'static str,
    /// Key column on the target table.
    pub foreign_key: &'static str,
}

impl Relation {
    pub fn one(target: &'static str, local_key: &'static str, foreign_key: &'static str) -> Self {
        Self {
            kind: RelationKind::One,
            target,
            local_key,
            foreign_key,
        }
    }

    pub fn many(target: &'static str, local_key: &'static str, foreign_key: &'static str) -> Self {
        Self {
            kind: RelationKind::Many,
            target,
            local_key,
            foreign_key,
        }
    }
}

/// Named tables and their relations.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    tables: HashMap<&'static str, HashMap<&'static str, Relation>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a table. Idempotent.
    pub fn table(mut self, name: &'static str) -> Self {
        self.tables.entry(name).or_default();
        self
    }

    /// Declare a named relation on `table`. Declares both endpoints' tables.
    pub fn relation(mut self, table: &'static str, name: &'static str, relation: Relation) -> Self {
        self.tables.entry(relation.target).or_default();
        self.tables.entry(table).or_default().insert(name, relation);
        self
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.keys().copied()
    }

    pub(crate) fn relation_of(&self, table: &str, name: &str) -> Result<&Relation> {
        let relations = self
            .tables
            .get(table)
            .ok_or_else(|| QueryError::UnknownTable(table.to_string()))?;
        relations
            .get(name)
            .ok_or_else(|| QueryError::UnknownRelation {
                table: table.to_string(),
                relation: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_lookup_resolves_declared_edges() {
        let schema = Schema::new().relation(
            "listings",
            "location",
            Relation::one("locations", "id", "listing_id"),
        );
        let rel = schema.relation_of("listings", "location").unwrap();
        assert_eq!(rel.target, "locations");
        assert!(schema.has_table("locations"));
    }

    #[test]
    fn unknown_names_error_instead_of_panicking() {
        let schema = Schema::new().table("listings");
        assert_eq!(
            schema.relation_of("nowhere", "x"),
            Err(QueryError::UnknownTable("nowhere".into()))
        );
        assert_eq!(
            schema.relation_of("listings", "ghost"),
            Err(QueryError::UnknownRelation {
                table: "listings".into(),
                relation: "ghost".into()
            })
        );
    }
}
