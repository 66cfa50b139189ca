//! Synchronous client core for the pet store `/pet` resource.
//!
//! # Overview
//! `PetClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `PetStore` drives it through a `Transport`
//! and confirms every write by reading the record back.
//!
//! # Design
//! - Existence is inferred from the shape of the read body (`is_missing`),
//!   never from the status code, because that is how the store reports it.
//! - Verification (`matches_stored`) is exact JSON equality, separate from
//!   the write so it can be tested on its own.
//! - The core returns results and errors as values; printing and log
//!   redirection belong to the binary.

pub mod client;
pub mod error;
pub mod example;
pub mod http;
pub mod store;
pub mod types;

pub use client::PetClient;
pub use error::{ApiError, PetStoreError, PetStoreResult};
pub use example::{example_pet, renamed_example_pet, EXAMPLE_PET_ID};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{PetStore, Transport};
pub use types::{
    is_missing, matches_stored, Category, DeletionResult, Lookup, Pet, Tag, PET_NOT_FOUND,
};
