//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs. The admin panel is
//! served by the same backend as the API, so the base is empty unless the
//! page config says otherwise.

use std::cell::RefCell;

use gloo_net::http::Response;

use crate::shared::error::ApiError;

thread_local! {
    static API_BASE: RefCell<String> = RefCell::new(String::new());
}

/// Set the base URL for API requests (called once at startup)
pub fn set_api_base(base: &str) {
    API_BASE.with(|b| *b.borrow_mut() = base.trim_end_matches('/').to_string());
}

/// Get the base URL for API requests
pub fn api_base() -> String {
    API_BASE.with(|b| b.borrow().clone())
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url(&format!("/api/orders/{}", encode_id(id)));
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Percent-encode an identifier taken from a `data-*` attribute
pub fn encode_id(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the server message
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} {} -> {}", response.url(), status, body);
    Err(ApiError::status(status, &body))
}

fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
