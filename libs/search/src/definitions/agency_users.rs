//! Search rules for agency users.

use lares_query::{Expr, Scope};

use super::{full_name, SearchDefinition};
use crate::context::SearchContext;
use crate::entity::EntityKey;
use crate::provider::SearchProvider;

/// Agency users match on account email, the person's normalised phone and
/// the profile name tenant-independently; contact name and contact email
/// only behind a tenant guard, so a same-named contact in another agency
/// never leaks into results. A person's contacts fan out per agency, hence
/// distinct.
pub struct AgencyUsersDefinition;

impl SearchDefinition for AgencyUsersDefinition {
    fn entity(&self) -> EntityKey {
        EntityKey::AgencyUsers
    }

    fn requires_distinct(&self) -> bool {
        true
    }

    fn join(&self, scope: Scope, _context: &SearchContext) -> Scope {
        scope
            .left_join(&["profile"])
            .left_join(&["person", "contacts"])
    }

    fn predicates(
        &self,
        query: &str,
        context: &SearchContext,
        provider: &dyn SearchProvider,
    ) -> Vec<Expr> {
        let mut predicates = vec![
            provider.build_text_predicate(Expr::column("users", "email"), query),
            provider.build_text_predicate(Expr::column("people", "normalized_phone"), query),
            provider.build_text_predicate(full_name("profiles"), query),
        ];

        if let Some(tenant_id) = context.tenant_id() {
            let tenant_guard =
                || Expr::column("contacts", "agency_id").eq(Expr::text(tenant_id.to_string()));
            predicates.push(
                tenant_guard().and(provider.build_text_predicate(full_name("contacts"), query)),
            );
            predicates.push(tenant_guard().and(
                provider.build_text_predicate(Expr::column("contacts", "email"), query),
            ));
        }

        predicates
    }
}
