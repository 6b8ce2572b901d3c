//! Search rules for purchase inquiries.

use lares_query::{Expr, Scope};

use super::{full_name, SearchDefinition};
use crate::context::SearchContext;
use crate::entity::EntityKey;
use crate::provider::SearchProvider;

/// Purchase inquiries match on the inquiring contact's name and the
/// person's normalised phone. Both joins are to-one, so no fan-out and no
/// distinct.
pub struct PurchaseInquiriesDefinition;

impl SearchDefinition for PurchaseInquiriesDefinition {
    fn entity(&self) -> EntityKey {
        EntityKey::PurchaseInquiries
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
        vec![
            provider.build_text_predicate(full_name("contacts"), query),
            provider.build_text_predicate(Expr::column("people", "normalized_phone"), query),
        ]
    }
}
