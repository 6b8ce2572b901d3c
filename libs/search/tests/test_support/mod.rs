//! Shared fixtures for the search integration tests: the realty schema and
//! small row builders over the in-memory dataset.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use lares_query::{Dataset, Relation, Schema, Scope};
use lares_search::{QueryService, SearchConfig};
use serde_json::{json, Value};
use uuid::Uuid;

/// The relation graph the six definitions compile against.
pub fn realty_schema() -> Schema {
    Schema::new()
        .relation(
            "listings",
            "location",
            Relation::one("locations", "id", "listing_id"),
        )
        .relation(
            "listings",
            "owners",
            Relation::many("listing_owners", "id", "listing_id"),
        )
        .relation(
            "listing_owners",
            "contact",
            Relation::one("contacts", "contact_id", "id"),
        )
        .relation(
            "contacts",
            "person",
            Relation::one("people", "person_id", "id"),
        )
        .relation("users", "profile", Relation::one("profiles", "id", "user_id"))
        .relation("users", "person", Relation::one("people", "person_id", "id"))
        .relation(
            "people",
            "contacts",
            Relation::many("contacts", "id", "person_id"),
        )
        .relation(
            "purchase_inquiries",
            "contact",
            Relation::one("contacts", "contact_id", "id"),
        )
        .table("categories")
        .table("characteristics")
}

pub fn dataset() -> Dataset {
    Dataset::new(realty_schema())
}

pub fn service() -> QueryService {
    QueryService::new(SearchConfig::default())
}

pub fn tenant() -> Uuid {
    Uuid::new_v4()
}

/// Materialise a scope and collect the `id` column of each returned row.
pub fn ids(data: &Dataset, scope: &Scope) -> Vec<String> {
    data.run(scope)
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap().to_string())
        .collect()
}

pub fn insert(data: &mut Dataset, table: &'static str, row: Value) {
    data.insert(table, row).expect("fixture row must insert");
}

pub fn add_listing(data: &mut Dataset, id: &str, title: &str) {
    insert(data, "listings", json!({"id": id, "title": title}));
}

pub fn add_location(data: &mut Dataset, id: &str, listing_id: &str, city: &str, street: &str) {
    insert(
        data,
        "locations",
        json!({
            "id": id,
            "listing_id": listing_id,
            "country": "Kazakhstan",
            "region": null,
            "city": city,
            "street": street,
            "house_number": null,
        }),
    );
}

pub fn add_person(data: &mut Dataset, id: &str, normalized_phone: Option<&str>) {
    insert(
        data,
        "people",
        json!({"id": id, "normalized_phone": normalized_phone}),
    );
}

pub fn add_contact(
    data: &mut Dataset,
    id: &str,
    person_id: &str,
    agency_id: Uuid,
    last_name: &str,
    first_name: &str,
    email: Option<&str>,
) {
    insert(
        data,
        "contacts",
        json!({
            "id": id,
            "person_id": person_id,
            "agency_id": agency_id.to_string(),
            "last_name": last_name,
            "first_name": first_name,
            "middle_name": null,
            "email": email,
        }),
    );
}

pub fn add_owner(data: &mut Dataset, id: &str, listing_id: &str, contact_id: &str) {
    insert(
        data,
        "listing_owners",
        json!({"id": id, "listing_id": listing_id, "contact_id": contact_id}),
    );
}

pub fn add_user(data: &mut Dataset, id: &str, person_id: &str, email: &str) {
    insert(
        data,
        "users",
        json!({"id": id, "person_id": person_id, "email": email}),
    );
}

pub fn add_profile(data: &mut Dataset, user_id: &str, last_name: &str, first_name: &str) {
    insert(
        data,
        "profiles",
        json!({
            "id": format!("profile-{user_id}"),
            "user_id": user_id,
            "last_name": last_name,
            "first_name": first_name,
            "middle_name": null,
        }),
    );
}

pub fn add_category(data: &mut Dataset, id: &str, title: &str) {
    insert(data, "categories", json!({"id": id, "title": title}));
}

/// Sorted copy, for order-insensitive comparisons.
pub fn sorted(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values
}
