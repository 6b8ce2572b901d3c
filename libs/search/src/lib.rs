//! lares-search — the entity-aware search compiler.
//!
//! Turns a free-form query string plus a target entity and a tenant context
//! into filter predicates applied to a [`Scope`](lares_query::Scope) the
//! caller already narrowed and authorized. The compiler stores nothing and
//! decides no access; it only joins, matches and caps.
//!
//! Flow: [`QueryService`] validates input through [`QueryParser`], resolves
//! the entity's [`SearchDefinition`] from the [`Registry`], resolves the
//! configured [`SearchProvider`], and hands the scope through
//! `provider.apply`. Definitions declare joins and OR-alternative match
//! fields; providers compile them into expression predicates.
//!
//! Every component is stateless after construction, so concurrent use needs
//! no locking.

#![forbid(unsafe_code)]

pub mod config;
pub mod context;
pub mod definitions;
pub mod entity;
pub mod error;
pub mod phone;
pub mod provider;
pub mod query_parser;
pub mod registry;
pub mod service;

pub use config::SearchConfig;
pub use context::SearchContext;
pub use definitions::SearchDefinition;
pub use entity::EntityKey;
pub use error::{Error, Result};
pub use provider::SearchProvider;
pub use query_parser::{ParsedQuery, QueryParser};
pub use registry::Registry;
pub use service::QueryService;
