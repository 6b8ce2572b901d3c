//! Search rules for listing owners.

use lares_query::{Expr, Scope};

use super::{full_name, phone_predicate, SearchDefinition};
use crate::context::SearchContext;
use crate::entity::EntityKey;
use crate::provider::SearchProvider;

/// Listing owners match on the contact's name, the contact email, and the
/// person's normalised phone through the phone path — that last predicate
/// is omitted when the query carries no digits.
pub struct ListingOwnersDefinition;

impl SearchDefinition for ListingOwnersDefinition {
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
        let mut predicates = vec![
            provider.build_text_predicate(full_name("contacts"), query),
            provider.build_text_predicate(Expr::column("contacts", "email"), query),
        ];
        if let Some(phone) = phone_predicate(
            provider,
            Expr::column("people", "normalized_phone"),
            query,
        ) {
            predicates.push(phone);
        }
        predicates
    }
}
