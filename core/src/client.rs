//! Stateless HTTP request builder and response parser for the pet resource.
//!
//! # Design
//! `PetClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Reads and writes are addressed the way
//! the store expects: `GET`/`DELETE` at `<root>/pet/<id>`, `POST`/`PUT` at
//! `<root>/pet` with the id inside the JSON body.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Pet;

/// Synchronous, stateless client for the `/pet` resource.
#[derive(Debug, Clone)]
pub struct PetClient {
    base_url: String,
}

impl PetClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_pet(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/pet/{id}", self.base_url),
            headers: accept_json(),
            body: None,
        }
    }

    pub fn build_create_pet(&self, pet: &Pet) -> Result<HttpRequest, ApiError> {
        self.build_write(HttpMethod::Post, pet)
    }

    pub fn build_update_pet(&self, pet: &Pet) -> Result<HttpRequest, ApiError> {
        self.build_write(HttpMethod::Put, pet)
    }

    pub fn build_delete_pet(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/pet/{id}", self.base_url),
            headers: accept_json(),
            body: None,
        }
    }

    fn build_write(&self, method: HttpMethod, pet: &Pet) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(pet).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let mut headers = accept_json();
        headers.push(("content-type".to_string(), "application/json".to_string()));
        Ok(HttpRequest {
            method,
            url: format!("{}/pet", self.base_url),
            headers,
            body: Some(body),
        })
    }

    /// Decode the body of a `GET /pet/<id>`.
    ///
    /// Any JSON body is returned whatever the status: the store sends its
    /// not-found marker with a 404, and existence is judged from the body
    /// alone. Only a body that is not JSON is an error.
    pub fn parse_get_pet(&self, response: HttpResponse) -> Result<Value, ApiError> {
        match serde_json::from_str(&response.body) {
            Ok(value) => Ok(value),
            Err(_) if !response.is_success() => Err(status_error(response)),
            Err(e) => Err(ApiError::DeserializationError(e.to_string())),
        }
    }

    /// The store echoes the written record; the echo is ignored because the
    /// write is confirmed by a separate read.
    pub fn parse_write_pet(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(response)
    }

    pub fn parse_delete_pet(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(response)
    }
}

fn accept_json() -> Vec<(String, String)> {
    vec![("accept".to_string(), "application/json".to_string())]
}

fn check_success(response: HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(status_error(response))
}

fn status_error(response: HttpResponse) -> ApiError {
    ApiError::HttpError {
        status: response.status,
        body: response.body,
    }
}
