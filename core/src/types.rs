//! Domain types for the pet resource.
//!
//! # Design
//! `Pet`, `Category` and `Tag` keep the fields the store documents as typed
//! members and carry anything else in `extra`, so a record loaded from a file
//! serializes back to the same JSON it was read from, nested objects
//! included. Reads are never forced through these types: `Lookup` holds the
//! body as the store sent it. The store reports an unknown id with a message
//! body rather than only a status code; that shape is recognised in one
//! place, `is_missing`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message the store puts in the `message` field when an id is unknown.
pub const PET_NOT_FOUND: &str = "Pet not found";

/// A pet record as stored by the remote service, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "photoUrls", default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Fields not modelled above, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of reading one id, holding the body exactly as the store sent it:
/// either a stored record or the not-found marker. Serializes as that body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Lookup {
    Found(Value),
    Missing(Value),
}

impl Lookup {
    /// Classify a read body with `is_missing`.
    pub fn from_body(body: Value) -> Self {
        if is_missing(&body) {
            Lookup::Missing(body)
        } else {
            Lookup::Found(body)
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Decode a found record as a `Pet`. `None` when the id is missing or
    /// the stored record does not fit the `Pet` schema.
    pub fn into_pet(self) -> Option<Pet> {
        match self {
            Lookup::Found(body) => serde_json::from_value(body).ok(),
            Lookup::Missing(_) => None,
        }
    }
}

/// Outcome of a delete that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionResult {
    Deleted,
    /// Nothing was stored under the id, so no delete request was sent.
    AlreadyAbsent,
}

/// True when `body` is the store's not-found marker: an object whose
/// `message` field equals `"Pet not found"`. Other fields are ignored.
pub fn is_missing(body: &Value) -> bool {
    body.get("message").and_then(Value::as_str) == Some(PET_NOT_FOUND)
}

/// Exact structural comparison of a record against the JSON the store holds.
/// Object key order is irrelevant; array order is significant.
pub fn matches_stored(expected: &Pet, stored: &Value) -> bool {
    match serde_json::to_value(expected) {
        Ok(sent) => &sent == stored,
        Err(_) => false,
    }
}
