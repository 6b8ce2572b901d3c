//! Searchable entity kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Closed enumeration of the entities search knows about. Adding a new
/// searchable entity means adding a case here plus one definition and one
/// registry row; nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKey {
    Listings,
    AgencyUsers,
    PurchaseInquiries,
    Categories,
    Characteristics,
    ListingOwners,
}

impl EntityKey {
    pub const ALL: [EntityKey; 6] = [
        EntityKey::Listings,
        EntityKey::AgencyUsers,
        EntityKey::PurchaseInquiries,
        EntityKey::Categories,
        EntityKey::Characteristics,
        EntityKey::ListingOwners,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKey::Listings => "listings",
            EntityKey::AgencyUsers => "agency-users",
            EntityKey::PurchaseInquiries => "purchase-inquiries",
            EntityKey::Categories => "categories",
            EntityKey::Characteristics => "characteristics",
            EntityKey::ListingOwners => "listing-owners",
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownEntity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for key in EntityKey::ALL {
            assert_eq!(key.as_str().parse::<EntityKey>().unwrap(), key);
        }
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = "postcards".parse::<EntityKey>().unwrap_err();
        assert_eq!(err, Error::UnknownEntity("postcards".into()));
    }
}
