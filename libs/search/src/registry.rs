//! Entity-to-definition registry.

use crate::definitions::{
    AgencyUsersDefinition, CategoriesDefinition, CharacteristicsDefinition,
    ListingOwnersDefinition, ListingsDefinition, PurchaseInquiriesDefinition, SearchDefinition,
};
use crate::entity::EntityKey;
use crate::error::{Error, Result};

static LISTINGS: ListingsDefinition = ListingsDefinition;
static AGENCY_USERS: AgencyUsersDefinition = AgencyUsersDefinition;
static PURCHASE_INQUIRIES: PurchaseInquiriesDefinition = PurchaseInquiriesDefinition;
static CATEGORIES: CategoriesDefinition = CategoriesDefinition;
static CHARACTERISTICS: CharacteristicsDefinition = CharacteristicsDefinition;
static LISTING_OWNERS: ListingOwnersDefinition = ListingOwnersDefinition;

/// The fixed definition table, assembled once for the process lifetime.
static DEFINITIONS: &[(EntityKey, &dyn SearchDefinition)] = &[
    (EntityKey::Listings, &LISTINGS),
    (EntityKey::AgencyUsers, &AGENCY_USERS),
    (EntityKey::PurchaseInquiries, &PURCHASE_INQUIRIES),
    (EntityKey::Categories, &CATEGORIES),
    (EntityKey::Characteristics, &CHARACTERISTICS),
    (EntityKey::ListingOwners, &LISTING_OWNERS),
];

/// Read-only lookup from entity key to its definition.
pub struct Registry;

impl Registry {
    pub fn definition_for(entity: EntityKey) -> Result<&'static dyn SearchDefinition> {
        tracing::debug!(entity = %entity, "looking up search definition");
        DEFINITIONS
            .iter()
            .find(|(key, _)| *key == entity)
            .map(|(_, definition)| *definition)
            .ok_or_else(|| Error::UnknownEntity(entity.to_string()))
    }
}
