//! HTTP client helpers for the REST backend.
//!
//! Every endpoint answers with the `{ data, pagination, error }` envelope,
//! so all helpers decode through [`Envelope`] and surface failures as
//! [`ApiError`]. Call sites catch the error, report it via the snackbar
//! and fall back to an empty view; nothing here retries.

use contracts::shared::envelope::{Envelope, ExportTicket, ListPage};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never reached the backend (network/CORS).
    Network(String),
    /// Non-2xx HTTP status.
    Http(u16),
    /// Body was not the expected JSON shape.
    Decode(String),
    /// HTTP 200 but the envelope's `error` field was set.
    Backend(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {e}"),
            ApiError::Http(status) => write!(f, "HTTP {status}"),
            ApiError::Decode(e) => write!(f, "bad response: {e}"),
            ApiError::Backend(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Base URL for API requests, derived from the current window location.
/// The backend always listens on port 3000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn get_envelope<T: DeserializeOwned>(path: &str) -> Result<Envelope<T>, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    response
        .json::<Envelope<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch one page of rows from a list endpoint. `path` carries the full
/// query string (page, per_page, filters).
pub async fn fetch_list<R: DeserializeOwned>(
    path: &str,
    requested_size: usize,
) -> Result<ListPage<R>, ApiError> {
    let envelope = get_envelope::<Vec<R>>(path).await?;
    ListPage::from_envelope(envelope, requested_size).map_err(ApiError::Backend)
}

/// Fetch a single record (detail endpoints).
pub async fn fetch_one<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let envelope = get_envelope::<T>(path).await?;
    let (data, _) = envelope.into_result().map_err(ApiError::Backend)?;
    Ok(data)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    let envelope = response
        .json::<Envelope<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let (data, _) = envelope.into_result().map_err(ApiError::Backend)?;
    Ok(data)
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    let envelope = response
        .json::<Envelope<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let (data, _) = envelope.into_result().map_err(ApiError::Backend)?;
    Ok(data)
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    Ok(())
}

/// Export endpoints generate the file server-side and return a URL.
pub async fn request_export(path: &str) -> Result<ExportTicket, ApiError> {
    fetch_one::<ExportTicket>(path).await
}
