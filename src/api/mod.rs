//! REST Gateway
//!
//! Thin `fetch` wrappers over the vault backend, organized by domain.

mod categories;
mod entries;
mod generator;
mod search;
mod session;
mod transfer;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Everything that can go wrong talking to the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}{}", status_detail(.message))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

fn status_detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `{"error": "..."}` body the backend sends on failures
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn fetch(&self, method: &str, path: &str, body: Option<String>) -> Result<Response, ApiError> {
        let init = RequestInit::new();
        init.set_method(method);
        if let Some(body) = body {
            let headers = Headers::new().map_err(|e| ApiError::Network(js_error(e)))?;
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| ApiError::Network(js_error(e)))?;
            init.set_headers(&headers);
            init.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(&self.url(path), &init)
            .map_err(|e| ApiError::Network(js_error(e)))?;
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(js_error(e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| ApiError::Decode("fetch did not yield a Response".to_string()))?;

        if !response.ok() {
            let message = error_message(&response).await;
            web_sys::console::error_1(
                &format!("[API] {} {} -> {}", method, path, response.status()).into(),
            );
            return Err(ApiError::Status {
                status: response.status(),
                message,
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.fetch("GET", path, None).await?;
        decode(response).await
    }

    async fn send_json<B, T>(&self, method: &str, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.fetch(method, path, Some(body)).await?;
        decode(response).await
    }

    /// Request whose response body is irrelevant beyond its status
    async fn send(&self, method: &str, path: &str) -> Result<(), ApiError> {
        self.fetch(method, path, None).await.map(|_| ())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(|e| ApiError::Decode(js_error(e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_error(e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn error_message(response: &Response) -> Option<String> {
    let promise = response.json().ok()?;
    let value = JsFuture::from(promise).await.ok()?;
    serde_wasm_bindgen::from_value::<ErrorBody>(value)
        .ok()
        .map(|body| body.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base() {
        assert_eq!(ApiClient::new("").url("/api/entries"), "/api/entries");
        assert_eq!(
            ApiClient::new("https://vault.local").url("/api/lock"),
            "https://vault.local/api/lock"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Status { status: 500, message: Some("db locked".into()) };
        assert_eq!(err.to_string(), "server returned 500: db locked");
        let err = ApiError::Status { status: 404, message: None };
        assert_eq!(err.to_string(), "server returned 404");
    }
}
