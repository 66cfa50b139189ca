//! Verify-after-write operations on top of a pluggable transport.
//!
//! # Design
//! `PetStore` owns a `PetClient` (pure request building/parsing) and a
//! `Transport` (the I/O). Every write is followed by a read that confirms the
//! store now holds exactly what was sent; a delete is followed by an
//! existence check. Nothing is retried: a failed confirmation is returned as
//! an error carrying the store's current state.
//!
//! Network calls per operation on the happy path:
//! - `create` / `update`: existence read, write, verification read.
//! - `delete`: existence read, delete, existence read.
//! - `info`: one read.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::PetClient;
use crate::error::{ApiError, PetStoreError, PetStoreResult};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{is_missing, matches_stored, DeletionResult, Lookup, Pet};

/// Executes one HTTP round-trip.
///
/// Any response the server produced, 4xx and 5xx included, must be returned
/// as `Ok`; `Err` is reserved for requests that got no response at all.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking CRUD client for pet records with post-condition checks.
#[derive(Debug, Clone)]
pub struct PetStore<T> {
    client: PetClient,
    transport: T,
}

impl<T: Transport> PetStore<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: PetClient::new(base_url),
            transport,
        }
    }

    pub fn client(&self) -> &PetClient {
        &self.client
    }

    /// Read whatever the store holds under `id`, undecoded.
    pub fn fetch(&self, id: i64) -> PetStoreResult<Lookup> {
        Ok(Lookup::from_body(self.fetch_raw(id)?))
    }

    /// Whether the store holds a record for `id`. Decided purely by the
    /// shape of the read body, see `is_missing`.
    pub fn exists(&self, id: i64) -> PetStoreResult<bool> {
        Ok(!is_missing(&self.fetch_raw(id)?))
    }

    /// Whether the store holds exactly `expected` under `expected.id`.
    pub fn verify(&self, expected: &Pet) -> PetStoreResult<bool> {
        let stored = self.fetch_raw(expected.id)?;
        if is_missing(&stored) {
            warn!(id = expected.id, "pet does not exist in the database");
            return Ok(false);
        }
        debug!(id = expected.id, "verifying stored details");
        Ok(matches_stored(expected, &stored))
    }

    pub fn create(&self, details: Pet) -> PetStoreResult<Pet> {
        let id = details.id;
        let current = self.fetch_raw(id)?;
        if !is_missing(&current) {
            return Err(PetStoreError::AlreadyExists {
                id,
                current: pretty(&current),
            });
        }

        info!(id, "creating pet");
        let request = self.client.build_create_pet(&details)?;
        self.client.parse_write_pet(self.transport.execute(request)?)?;

        if !self.verify(&details)? {
            return Err(self.verification_failed(id, "created"));
        }
        info!(id, "pet created");
        Ok(details)
    }

    pub fn update(&self, details: Pet) -> PetStoreResult<Pet> {
        let id = details.id;
        if !self.exists(id)? {
            return Err(PetStoreError::NotFound { id });
        }

        info!(id, "updating pet");
        let request = self.client.build_update_pet(&details)?;
        self.client.parse_write_pet(self.transport.execute(request)?)?;

        if !self.verify(&details)? {
            return Err(self.verification_failed(id, "updated"));
        }
        info!(id, "pet updated");
        Ok(details)
    }

    pub fn delete(&self, id: i64) -> PetStoreResult<DeletionResult> {
        let current = self.fetch_raw(id)?;
        if is_missing(&current) {
            info!(id, "pet does not exist, nothing to delete");
            return Ok(DeletionResult::AlreadyAbsent);
        }

        info!(id, record = %current, "removing pet");
        let request = self.client.build_delete_pet(id);
        self.client.parse_delete_pet(self.transport.execute(request)?)?;

        if self.exists(id)? {
            return Err(PetStoreError::DeletionNotConfirmed { id });
        }
        info!(id, "pet removed");
        Ok(DeletionResult::Deleted)
    }

    /// Current state of `id` for display; performs no checks.
    pub fn info(&self, id: i64) -> PetStoreResult<Lookup> {
        self.fetch(id)
    }

    fn fetch_raw(&self, id: i64) -> PetStoreResult<Value> {
        let response = self.transport.execute(self.client.build_get_pet(id))?;
        Ok(self.client.parse_get_pet(response)?)
    }

    /// Builds the error for a write that did not read back. The extra read
    /// only feeds the message, so its own failure is folded into the text.
    fn verification_failed(&self, id: i64, action: &'static str) -> PetStoreError {
        let current = match self.fetch_raw(id) {
            Ok(body) => pretty(&body),
            Err(e) => format!("<unavailable: {e}>"),
        };
        PetStoreError::VerificationFailed { id, action, current }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
