//! Search rules for listings.

use lares_query::{Expr, Scope};

use super::{full_name, SearchDefinition};
use crate::context::SearchContext;
use crate::entity::EntityKey;
use crate::provider::SearchProvider;

/// Listings match on title, concatenated owner name and concatenated
/// address. The owners join fans out (a listing can have several owners),
/// so results are deduplicated.
pub struct ListingsDefinition;

impl SearchDefinition for ListingsDefinition {
    fn entity(&self) -> EntityKey {
        EntityKey::Listings
    }

    fn requires_distinct(&self) -> bool {
        true
    }

    fn join(&self, scope: Scope, _context: &SearchContext) -> Scope {
        scope
            .left_join(&["location"])
            .left_join(&["owners", "contact"])
    }

    fn predicates(
        &self,
        query: &str,
        _context: &SearchContext,
        provider: &dyn SearchProvider,
    ) -> Vec<Expr> {
        let owner_name = full_name("contacts");
        let address = Expr::concat_ws(vec![
            Expr::column("locations", "country"),
            Expr::column("locations", "region"),
            Expr::column("locations", "city"),
            Expr::column("locations", "street"),
            Expr::column("locations", "house_number"),
        ]);

        vec![
            provider.build_text_predicate(Expr::column("listings", "title"), query),
            provider.build_text_predicate(owner_name, query),
            provider.build_text_predicate(address, query),
        ]
    }
}
