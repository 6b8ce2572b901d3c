//! Search rules for listing characteristics.

use lares_query::Expr;

use super::SearchDefinition;
use crate::context::SearchContext;
use crate::entity::EntityKey;
use crate::provider::SearchProvider;

/// Characteristics mirror categories: a flat reference table searched by
/// title or identifier-as-text.
pub struct CharacteristicsDefinition;

impl SearchDefinition for CharacteristicsDefinition {
    fn entity(&self) -> EntityKey {
        EntityKey::Characteristics
    }

    fn predicates(
        &self,
        query: &str,
        _context: &SearchContext,
        provider: &dyn SearchProvider,
    ) -> Vec<Expr> {
        vec![
            provider.build_text_predicate(Expr::column("characteristics", "title"), query),
            provider.build_text_predicate(Expr::column("characteristics", "id").as_text(), query),
        ]
    }
}
