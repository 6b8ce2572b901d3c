//! Search rules for listing categories.

use lares_query::Expr;

use super::SearchDefinition;
use crate::context::SearchContext;
use crate::entity::EntityKey;
use crate::provider::SearchProvider;

/// Categories are a flat reference table: title, or the identifier rendered
/// as text for admin lookups by id fragment.
pub struct CategoriesDefinition;

impl SearchDefinition for CategoriesDefinition {
    fn entity(&self) -> EntityKey {
        EntityKey::Categories
    }

    fn predicates(
        &self,
        query: &str,
        _context: &SearchContext,
        provider: &dyn SearchProvider,
    ) -> Vec<Expr> {
        vec![
            provider.build_text_predicate(Expr::column("categories", "title"), query),
            provider.build_text_predicate(Expr::column("categories", "id").as_text(), query),
        ]
    }
}
