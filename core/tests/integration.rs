//! Full create/update/delete lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `PetStore` over real
//! HTTP through a small ureq-backed `Transport`.

use petstore_core::{
    ApiError, DeletionResult, HttpMethod, HttpRequest, HttpResponse, Lookup, Pet, PetStore,
    PetStoreError, Transport,
};
use serde_json::json;

/// Executes requests with ureq, returning 4xx/5xx responses as data and
/// forwarding the request headers the core builds.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let body = req.body.unwrap_or_default();
        let result = match req.method {
            HttpMethod::Get => with_headers(self.agent.get(&req.url), &req.headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&req.url), &req.headers).call(),
            HttpMethod::Post => {
                with_headers(self.agent.post(&req.url), &req.headers).send(body.as_bytes())
            }
            HttpMethod::Put => {
                with_headers(self.agent.put(&req.url), &req.headers).send(body.as_bytes())
            }
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn pet(id: i64, name: &str) -> Pet {
    serde_json::from_value(json!({
        "id": id,
        "category": {"id": 0, "name": "dog"},
        "name": name,
        "status": "availableForAdoption",
        "tags": [{"id": 0, "name": format!("{}_{id}", name.to_lowercase())}],
        "photoUrls": ["http://x"]
    }))
    .unwrap()
}

#[test]
fn crud_lifecycle() {
    let store = PetStore::new(&start_server(), UreqTransport::new());

    // Step 1: nothing stored yet.
    assert!(!store.exists(1).unwrap());

    // Step 2: create and read back.
    store.create(pet(1, "Ralph")).unwrap();
    assert_eq!(store.fetch(1).unwrap().into_pet(), Some(pet(1, "Ralph")));

    // Step 3: update the name.
    store.update(pet(1, "Ruff")).unwrap();
    let stored = store.fetch(1).unwrap().into_pet().unwrap();
    assert_eq!(stored.name.as_deref(), Some("Ruff"));
    assert_eq!(stored.tags[0].name, "ruff_1");

    // Step 4: delete, then the store reports the not-found marker.
    assert_eq!(store.delete(1).unwrap(), DeletionResult::Deleted);
    assert_eq!(
        store.info(1).unwrap(),
        Lookup::Missing(json!({"code": 1, "type": "error", "message": "Pet not found"}))
    );

    // Step 5: deleting again is not an error.
    assert_eq!(store.delete(1).unwrap(), DeletionResult::AlreadyAbsent);
}

#[test]
fn create_twice_reports_stored_record() {
    let store = PetStore::new(&start_server(), UreqTransport::new());

    store.create(pet(2, "Ralph")).unwrap();
    let err = store.create(pet(2, "Second")).unwrap_err();
    match err {
        PetStoreError::AlreadyExists { id, current } => {
            assert_eq!(id, 2);
            assert!(current.contains("Ralph"));
            assert!(!current.contains("Second"));
        }
        other => panic!("expected AlreadyExists, got {other:?}"),
    }
}

#[test]
fn update_of_unknown_id_is_not_found() {
    let store = PetStore::new(&start_server(), UreqTransport::new());

    let err = store.update(pet(3, "Ghost")).unwrap_err();
    assert!(matches!(err, PetStoreError::NotFound { id: 3 }));
}

#[test]
fn unreachable_store_is_transport_error() {
    // Bind then drop to obtain a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let store = PetStore::new(&format!("http://{addr}"), UreqTransport::new());

    let err = store.exists(1).unwrap_err();
    assert!(matches!(err, PetStoreError::Api(ApiError::Transport(_))));
}
