//! Reference substring backend.
//!
//! Compiles each field into a case-insensitive `%query%` match: the shape
//! trigram indexes accelerate on the SQL side and `like_match` evaluates in
//! memory.

use lares_query::{escape_like, Expr, Scope};

use super::SearchProvider;
use crate::context::SearchContext;
use crate::definitions::SearchDefinition;

pub struct SubstringProvider;

impl SearchProvider for SubstringProvider {
    fn apply(
        &self,
        scope: Scope,
        definition: &dyn SearchDefinition,
        query: &str,
        context: &SearchContext,
    ) -> Scope {
        let prepared = definition.prepare(scope, context);
        let mut predicates = definition.predicates(query, context, self).into_iter();
        let Some(first) = predicates.next() else {
            // Nothing contributed a condition (e.g. a digit-free query
            // against a phone-only field): the joined scope passes through
            // unfiltered.
            return prepared;
        };
        let combined = predicates.fold(first, |memo, predicate| memo.or(predicate));
        prepared.filter(combined)
    }

    fn build_text_predicate(&self, expression: Expr, query: &str) -> Expr {
        expression.matches(format!("%{}%", escape_like(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKey;

    #[test]
    fn text_predicate_escapes_wildcards_and_wraps() {
        let provider = SubstringProvider;
        let predicate =
            provider.build_text_predicate(Expr::column("listings", "title"), "50%_done");
        let Expr::Match { pattern, .. } = predicate else {
            panic!("expected Match");
        };
        assert_eq!(pattern, "%50\\%\\_done%");
    }

    /// A definition whose every predicate is omitted.
    struct PhoneOnly;

    impl SearchDefinition for PhoneOnly {
        fn entity(&self) -> EntityKey {
            EntityKey::ListingOwners
        }

        fn join(&self, scope: Scope, _context: &SearchContext) -> Scope {
            scope.left_join(&["contact", "person"])
        }

        fn predicates(
            &self,
            query: &str,
            _context: &SearchContext,
            provider: &dyn SearchProvider,
        ) -> Vec<Expr> {
            crate::definitions::phone_predicate(
                provider,
                Expr::column("people", "normalized_phone"),
                query,
            )
            .into_iter()
            .collect()
        }
    }

    #[test]
    fn empty_predicate_list_returns_joined_scope_unfiltered() {
        let provider = SubstringProvider;
        let scope = provider.apply(
            Scope::new("listing_owners"),
            &PhoneOnly,
            "no digits here",
            &SearchContext::anonymous(),
        );
        assert!(scope.predicate().is_none());
        assert_eq!(scope.joins().len(), 1);
    }

    #[test]
    fn predicates_combine_with_or() {
        let provider = SubstringProvider;
        let scope = provider.apply(
            Scope::new("categories"),
            &crate::definitions::CategoriesDefinition,
            "villa",
            &SearchContext::anonymous(),
        );
        assert!(matches!(scope.predicate(), Some(Expr::Or(_, _))));
    }
}
