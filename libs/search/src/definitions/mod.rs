//! Per-entity search rules.
//!
//! A definition declares which relations reach its searchable fields and
//! which field expressions to test. The predicates it returns are
//! independent OR-alternatives — a row qualifies when any declared field
//! matches, because title, owner name and address are all ways a human may
//! have searched. Definitions are stateless singletons built once at
//! startup; per-call state never exists.

mod agency_users;
mod categories;
mod characteristics;
mod listing_owners;
mod listings;
mod purchase_inquiries;

pub use agency_users::AgencyUsersDefinition;
pub use categories::CategoriesDefinition;
pub use characteristics::CharacteristicsDefinition;
pub use listing_owners::ListingOwnersDefinition;
pub use listings::ListingsDefinition;
pub use purchase_inquiries::PurchaseInquiriesDefinition;

use lares_query::{Expr, Scope};

use crate::context::SearchContext;
use crate::entity::EntityKey;
use crate::phone::normalize_phone_query;
use crate::provider::SearchProvider;

/// The rule set for one searchable entity.
pub trait SearchDefinition: Send + Sync {
    /// The registry key this definition answers for.
    fn entity(&self) -> EntityKey;

    /// Whether joining can fan a base row out into multiple tuples, which
    /// requires deduplication of results.
    fn requires_distinct(&self) -> bool {
        false
    }

    /// Add the outer joins this definition's fields need — only those, and
    /// outer so rows lacking an optional related row stay candidates.
    fn join(&self, scope: Scope, context: &SearchContext) -> Scope {
        let _ = context;
        scope
    }

    /// Joins plus deduplication when required. Providers call this before
    /// asking for predicates.
    fn prepare(&self, scope: Scope, context: &SearchContext) -> Scope {
        let scoped = self.join(scope, context);
        if self.requires_distinct() {
            scoped.distinct()
        } else {
            scoped
        }
    }

    /// The OR-alternative predicates for `query`. May legitimately be empty
    /// — "no match condition contributed" — in which case the provider
    /// leaves the scope unfiltered.
    fn predicates(
        &self,
        query: &str,
        context: &SearchContext,
        provider: &dyn SearchProvider,
    ) -> Vec<Expr>;
}

/// `last first middle` as one filterable expression, so a multi-word query
/// can span name parts. NULL parts coalesce to empty strings instead of
/// nulling out the whole concatenation.
pub(crate) fn full_name(table: &'static str) -> Expr {
    Expr::concat_ws(vec![
        Expr::column(table, "last_name"),
        Expr::column(table, "first_name"),
        Expr::column(table, "middle_name"),
    ])
}

/// Phone-path predicate: normalise the query as a phone number first, and
/// omit the predicate entirely when nothing normalisable is left.
pub(crate) fn phone_predicate(
    provider: &dyn SearchProvider,
    expression: Expr,
    query: &str,
) -> Option<Expr> {
    let normalized = normalize_phone_query(query)?;
    Some(provider.build_text_predicate(expression, &normalized))
}
