//! Per-request search context.

use uuid::Uuid;

/// Immutable capsule carrying the requesting tenant and actor through a
/// search call. It owns nothing and is never mutated; definitions read the
/// tenant id to build tenant-guard predicates, the service logs it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchContext {
    tenant_id: Option<Uuid>,
    actor_id: Option<Uuid>,
}

impl SearchContext {
    pub fn new(tenant_id: Option<Uuid>, actor_id: Option<Uuid>) -> Self {
        Self {
            tenant_id,
            actor_id,
        }
    }

    /// A context with neither tenant nor actor, e.g. for system-initiated
    /// searches. Tenant-guarded predicates are skipped for it.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn tenant_id(&self) -> Option<Uuid> {
        self.tenant_id
    }

    pub fn actor_id(&self) -> Option<Uuid> {
        self.actor_id
    }
}
