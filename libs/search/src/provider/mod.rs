//! Pluggable predicate backends.
//!
//! A provider owns both halves of compilation: turning one field expression
//! plus a query into a match predicate, and orchestrating a definition's
//! joins and predicates over a scope. Definitions never build backend
//! syntax themselves beyond naming columns and expressions.

mod substring;

pub use substring::SubstringProvider;

use lares_query::{Expr, Scope};

use crate::context::SearchContext;
use crate::definitions::SearchDefinition;
use crate::error::{Error, Result};

/// Backend strategy interface. Implementations are stateless and shared.
pub trait SearchProvider: Send + Sync {
    /// Apply `definition` to `scope` for `query`: prepare joins, collect
    /// predicates, OR them together, filter. An empty predicate list leaves
    /// the prepared scope unfiltered by design.
    fn apply(
        &self,
        scope: Scope,
        definition: &dyn SearchDefinition,
        query: &str,
        context: &SearchContext,
    ) -> Scope;

    /// Compile one field/expression and the normalised query into a match
    /// predicate under this backend's semantics.
    fn build_text_predicate(&self, expression: Expr, query: &str) -> Expr;
}

static SUBSTRING: SubstringProvider = SubstringProvider;

/// Resolve the configured provider name. The reference backend answers to
/// both of its historical names.
pub fn provider_for(name: &str) -> Result<&'static dyn SearchProvider> {
    tracing::debug!(provider = name, "resolving search provider");
    match name {
        "substring" | "trigram" => Ok(&SUBSTRING),
        other => Err(Error::UnknownProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_backend_answers_to_both_names() {
        assert!(provider_for("substring").is_ok());
        assert!(provider_for("trigram").is_ok());
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        assert_eq!(
            provider_for("elastic").err(),
            Some(Error::UnknownProvider("elastic".into()))
        );
    }
}
