//! HTTP Command Wrappers
//!
//! Frontend bindings to the planner endpoints, organized by domain.

mod shopping;
mod ingredient;
mod plan;
mod recipe;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::StatusResponse;

// Re-export all public items
pub use shopping::*;
pub use ingredient::*;
pub use plan::*;
pub use recipe::*;

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url).send().await?;
    read_json(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(url).json(body)?.send().await?;
    read_json(response).await
}

async fn post_empty<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::post(url).send().await?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    decode_body(response.ok(), response.status(), &body)
}

/// Decode a JSON body. Error statuses that still carry a parsable body
/// (e.g. `{"status": "error", "message": ...}`) are returned as parsed.
fn decode_body<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str(body) {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(ApiError::Http(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Map a `{status, message}` reply onto a result
fn check_status(reply: StatusResponse) -> Result<(), ApiError> {
    if reply.is_success() {
        Ok(())
    } else {
        Err(ApiError::Rejected(
            reply.message.unwrap_or_else(|| format!("unexpected status \"{}\"", reply.status)),
        ))
    }
}
