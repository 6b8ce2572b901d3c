//! Error types for the query model.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error("unknown relation: {table}.{relation}")]
    UnknownRelation { table: String, relation: String },

    /// An expression referenced a table that the scope never joined.
    #[error("table not joined in scope: {0}")]
    TableNotJoined(String),

    #[error("rows must be JSON objects, got: {0}")]
    InvalidRow(String),
}
