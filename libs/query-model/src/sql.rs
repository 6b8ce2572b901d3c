//! SQL rendering of scopes.
//!
//! Compiles a [`Scope`] into a parameterised `SELECT` with `$n` placeholders
//! and a bind list, deriving join conditions from the [`Schema`]. Rendering
//! builds the statement only; executing it is the caller's concern.

use crate::error::Result;
use crate::expr::Expr;
use crate::schema::Schema;
use crate::scope::Scope;

/// Bind values accompanying a rendered statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
}

/// A rendered statement plus its binds, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// Render `scope` as SQL against `schema`.
pub fn render_sql(scope: &Scope, schema: &Schema) -> Result<SqlQuery> {
    let base = scope.base();
    let mut sql = String::new();
    sql.push_str(if scope.is_distinct() {
        "SELECT DISTINCT "
    } else {
        "SELECT "
    });
    sql.push_str(base);
    sql.push_str(".* FROM ");
    sql.push_str(base);

    // One LEFT JOIN per path segment, deduplicated across overlapping paths.
    let mut joined: Vec<&'static str> = Vec::new();
    for path in scope.joins() {
        let mut current = base;
        for segment in path {
            let relation = schema.relation_of(current, segment)?;
            if !joined.contains(&relation.target) {
                joined.push(relation.target);
                sql.push_str(&format!(
                    " LEFT JOIN {target} ON {target}.{fk} = {parent}.{lk}",
                    target = relation.target,
                    fk = relation.foreign_key,
                    parent = current,
                    lk = relation.local_key,
                ));
            }
            current = relation.target;
        }
    }

    let mut binds = Vec::new();
    if let Some(predicate) = scope.predicate() {
        sql.push_str(" WHERE ");
        sql.push_str(&render_expr(predicate, &mut binds));
    }
    if let Some(limit) = scope.row_limit() {
        sql.push_str(&format!(" LIMIT {limit}"));
    }
    Ok(SqlQuery { sql, binds })
}

/// Append a text bind, returning its 1-based placeholder index.
fn push_text(binds: &mut Vec<BindValue>, value: String) -> usize {
    binds.push(BindValue::Text(value));
    binds.len()
}

fn render_expr(expr: &Expr, binds: &mut Vec<BindValue>) -> String {
    match expr {
        Expr::Column(column) => format!("{}.{}", column.table, column.name),
        Expr::Literal(value) => {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let idx = push_text(binds, text);
            format!("${idx}")
        }
        Expr::Cast(inner) => format!("({})::text", render_expr(inner, binds)),
        Expr::Concat(parts) => {
            let rendered: Vec<String> = parts.iter().map(|p| render_expr(p, binds)).collect();
            format!("({})", rendered.join(" || "))
        }
        Expr::Coalesce(value, fallback) => format!(
            "coalesce({}, {})",
            render_expr(value, binds),
            render_expr(fallback, binds)
        ),
        Expr::Match { expr, pattern } => {
            let lhs = render_expr(expr, binds);
            let idx = push_text(binds, pattern.clone());
            format!("{lhs} ILIKE ${idx} ESCAPE E'\\\\'")
        }
        Expr::Eq(left, right) => format!(
            "({} = {})",
            render_expr(left, binds),
            render_expr(right, binds)
        ),
        Expr::And(left, right) => format!(
            "({} AND {})",
            render_expr(left, binds),
            render_expr(right, binds)
        ),
        Expr::Or(left, right) => format!(
            "({} OR {})",
            render_expr(left, binds),
            render_expr(right, binds)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Relation;

    fn schema() -> Schema {
        Schema::new()
            .relation(
                "listings",
                "location",
                Relation::one("locations", "id", "listing_id"),
            )
            .relation(
                "listings",
                "owners",
                Relation::many("listing_owners", "id", "listing_id"),
            )
            .relation(
                "listing_owners",
                "contact",
                Relation::one("contacts", "contact_id", "id"),
            )
    }

    #[test]
    fn renders_joins_in_path_order() {
        let scope = Scope::new("listings")
            .left_join(&["location"])
            .left_join(&["owners", "contact"])
            .distinct();
        let query = render_sql(&scope, &schema()).unwrap();
        assert_eq!(
            query.sql,
            "SELECT DISTINCT listings.* FROM listings \
             LEFT JOIN locations ON locations.listing_id = listings.id \
             LEFT JOIN listing_owners ON listing_owners.listing_id = listings.id \
             LEFT JOIN contacts ON contacts.id = listing_owners.contact_id"
        );
        assert!(query.binds.is_empty());
    }

    #[test]
    fn renders_match_as_parameterised_ilike() {
        let scope = Scope::new("listings")
            .filter(Expr::column("listings", "title").matches("%cottage%"))
            .limit(2);
        let query = render_sql(&scope, &schema()).unwrap();
        assert_eq!(
            query.sql,
            "SELECT listings.* FROM listings WHERE listings.title ILIKE $1 ESCAPE E'\\\\' LIMIT 2"
        );
        assert_eq!(query.binds, vec![BindValue::Text("%cottage%".into())]);
    }

    #[test]
    fn renders_coalesced_concat_and_or() {
        let name = Expr::concat_ws(vec![
            Expr::column("contacts", "last_name"),
            Expr::column("contacts", "first_name"),
        ]);
        let predicate = name
            .matches("%ivan%")
            .or(Expr::column("contacts", "id").as_text().matches("%ivan%"));
        let scope = Scope::new("contacts").filter(predicate);
        let query = render_sql(&scope, &Schema::new().table("contacts")).unwrap();
        assert_eq!(
            query.sql,
            "SELECT contacts.* FROM contacts WHERE \
             ((coalesce(contacts.last_name, $1) || $2 || coalesce(contacts.first_name, $3)) \
             ILIKE $4 ESCAPE E'\\\\' OR (contacts.id)::text ILIKE $5 ESCAPE E'\\\\')"
        );
        assert_eq!(query.binds.len(), 5);
        assert_eq!(query.binds[3], BindValue::Text("%ivan%".into()));
    }

    #[test]
    fn unknown_relation_errors() {
        let scope = Scope::new("listings").left_join(&["ghost"]);
        assert!(render_sql(&scope, &schema()).is_err());
    }
}
