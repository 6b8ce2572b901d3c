//! The search façade.

use lares_query::Scope;

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::entity::EntityKey;
use crate::error::Result;
use crate::provider::provider_for;
use crate::query_parser::QueryParser;
use crate::registry::Registry;

/// Applies entity search to a caller-supplied scope.
///
/// Stateless after construction; one instance can serve unbounded
/// concurrent callers. The only side effect of [`QueryService::search`] is
/// a single PII-safe audit log event.
#[derive(Debug, Clone)]
pub struct QueryService {
    config: SearchConfig,
}

impl QueryService {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Narrow `scope` to rows matching `query`, under the rules registered
    /// for `entity`.
    ///
    /// A `None` or blank query returns the scope unchanged. `limit` caps
    /// the result when positive and is ignored otherwise.
    pub fn search(
        &self,
        entity: EntityKey,
        scope: Scope,
        query: Option<&str>,
        context: &SearchContext,
        limit: Option<i64>,
    ) -> Result<Scope> {
        let Some(parsed) = QueryParser::parse(query, self.config.query_max_length)? else {
            return Ok(scope);
        };

        // Audit trail: the masked form only — never the raw or normalized
        // query, which may carry an email or phone number.
        tracing::info!(
            entity = %entity,
            tenant_id = ?context.tenant_id(),
            query = %parsed.masked,
            "applying search"
        );

        let definition = Registry::definition_for(entity)?;
        let provider = provider_for(&self.config.provider)?;
        let result = provider.apply(scope, definition, &parsed.normalized, context);
        Ok(apply_limit(result, limit))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

fn apply_limit(scope: Scope, limit: Option<i64>) -> Scope {
    match limit {
        Some(n) if n > 0 => scope.limit(n as usize),
        _ => scope,
    }
}
