//! Wire types and HTTP API for the IdMark identity hash service.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use idmark_ffi::{ForeignHasher, HashOutcome};

/// In-band marker carried in [`HashResponse::hash`] when the foreign digest
/// routine signals failure. The HTTP status stays 200; callers inspect the
/// field content.
pub const FAILURE_MARKER: &str = "error";

/// A digest request. A missing or zero `timestamp` means "use the current
/// time"; the result is then time-dependent, so callers needing a
/// reproducible digest must pass an explicit non-zero timestamp.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HashRequest {
    pub email: String,
    /// Unix epoch seconds. Zero is the sentinel for "unspecified".
    #[serde(default)]
    pub timestamp: u64,
}

/// A digest response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HashResponse {
    pub hash: String,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before Unix epoch")
        .as_secs()
}

async fn hash_handler(State(hasher): State<ForeignHasher>, body: Bytes) -> Response {
    // The 400 body is part of the wire contract, so the body is decoded by
    // hand instead of through the Json extractor.
    let req: HashRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(err) => {
            debug!("rejecting undecodable request body: {err}");
            return (StatusCode::BAD_REQUEST, "invalid request").into_response();
        }
    };

    let timestamp = if req.timestamp == 0 {
        unix_now()
    } else {
        req.timestamp
    };

    let hash = match hasher.hash_identity(&req.email, timestamp) {
        HashOutcome::Digest(digest) => digest,
        HashOutcome::Failure => FAILURE_MARKER.to_string(),
    };

    Json(HashResponse { hash }).into_response()
}

/// Build the HTTP API router around the given foreign digest routine.
pub fn build_router(hasher: ForeignHasher) -> Router {
    Router::new()
        .route("/hash", post(hash_handler))
        .with_state(hasher)
}
