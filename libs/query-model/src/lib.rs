//! lares-query — the queryable collection model consumed by Lares search.
//!
//! A search compilation never touches the database directly. Definitions and
//! providers build values from this crate:
//!
//! - [`Expr`] — a typed boolean/text expression tree. All backend syntax is
//!   isolated behind the things that walk it.
//! - [`Scope`] — a lazy query plan over one base table: outer-join paths,
//!   distinct, an accumulated filter, a row limit. Nothing executes until a
//!   caller materialises the scope.
//! - [`Schema`] / [`Dataset`] — named relations between tables, and an
//!   in-memory executor that materialises scopes against JSON rows.
//! - [`SqlQuery`] — the SQL rendering of a scope, as a parameterised
//!   statement plus bind values.

#![forbid(unsafe_code)]

mod dataset;
mod error;
mod expr;
mod like;
mod schema;
mod scope;
mod sql;

pub use dataset::{Dataset, Row};
pub use error::{QueryError, Result};
pub use expr::{ColumnRef, Expr};
pub use like::{escape_like, like_match};
pub use schema::{Relation, RelationKind, Schema};
pub use scope::{JoinPath, Scope};
pub use sql::{render_sql, BindValue, SqlQuery};
