//! In-memory stand-in for the pet store's `/pet` resource.
//!
//! Reproduces the behaviour the client depends on: an unknown id reads back
//! as `404` with the `{"code":1,"type":"error","message":"Pet not found"}`
//! body, writes store the request body verbatim keyed by its `id`, and both
//! `POST` and `PUT` upsert.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

pub type Db = Arc<RwLock<HashMap<i64, Value>>>;

type Reply = (StatusCode, Json<Value>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/pet", post(upsert_pet).put(upsert_pet))
        .route("/pet/{id}", get(get_pet).delete(delete_pet))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn pet_not_found() -> Reply {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"code": 1, "type": "error", "message": "Pet not found"})),
    )
}

fn unknown(status: StatusCode, message: String) -> Reply {
    (
        status,
        Json(json!({"code": status.as_u16(), "type": "unknown", "message": message})),
    )
}

fn parse_id(raw: &str) -> Result<i64, Reply> {
    raw.parse().map_err(|_| {
        unknown(
            StatusCode::NOT_FOUND,
            format!("java.lang.NumberFormatException: For input string: \"{raw}\""),
        )
    })
}

async fn upsert_pet(State(db): State<Db>, Json(pet): Json<Value>) -> Reply {
    let Some(id) = pet.get("id").and_then(Value::as_i64) else {
        return unknown(StatusCode::BAD_REQUEST, "bad input".to_string());
    };
    debug!(id, "storing pet");
    db.write().await.insert(id, pet.clone());
    (StatusCode::OK, Json(pet))
}

async fn get_pet(State(db): State<Db>, Path(raw): Path<String>) -> Reply {
    let id = match parse_id(&raw) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    match db.read().await.get(&id) {
        Some(pet) => (StatusCode::OK, Json(pet.clone())),
        None => pet_not_found(),
    }
}

async fn delete_pet(State(db): State<Db>, Path(raw): Path<String>) -> Result<Reply, StatusCode> {
    let id = match parse_id(&raw) {
        Ok(id) => id,
        Err(reply) => return Ok(reply),
    };
    debug!(id, "deleting pet");
    db.write()
        .await
        .remove(&id)
        .map(|_| unknown(StatusCode::OK, id.to_string()))
        .ok_or(StatusCode::NOT_FOUND)
}
