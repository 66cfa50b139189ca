//! Error types for the pet store client.
//!
//! # Design
//! `ApiError` covers everything below the domain: the transport, unexpected
//! HTTP statuses and JSON that cannot be encoded or decoded. `PetStoreError`
//! adds the verify-after-write failures. Domain variants carry the store's
//! current record, pretty-printed, so a failure can be diagnosed from the
//! message alone.

use thiserror::Error;

/// Failures while talking to the store.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The store answered with a status the operation does not accept.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Errors returned by `PetStore` operations.
#[derive(Debug, Error)]
pub enum PetStoreError {
    #[error(
        "Pet ID '{id}' already exists in the database. Here are the current details in the \
         database for this ID:\n{current}\nPlease choose 'update' if you would like to amend \
         these details."
    )]
    AlreadyExists { id: i64, current: String },

    #[error(
        "Pet ID '{id}' does not exist in the database. Please use a valid ID or create a new \
         entry with this ID."
    )]
    NotFound { id: i64 },

    #[error(
        "Pet ID '{id}' was not {action} successfully. Here are the current details in the \
         database for this ID:\n{current}"
    )]
    VerificationFailed {
        id: i64,
        action: &'static str,
        current: String,
    },

    #[error(
        "Deletion of pet with ID '{id}' seems to not have worked correctly. Please check the \
         system and try again."
    )]
    DeletionNotConfirmed { id: i64 },

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type PetStoreResult<T> = Result<T, PetStoreError>;
