//! HTTP client with auth header injection and request/response tracing.
//!
//! The bearer token is read from the profile store on every request, so the
//! client never caches credentials; a missing token is a valid state and the
//! request simply goes out unauthenticated.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::certificates::CertificateIdMode;
use super::error::ApiError;
use crate::storage::ProfileStore;

/// Fixed client-wide timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Default backend base URL when `LEARNHUB_API_URL` is not set.
const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// HTTP client wrapper for LearnHub backend communication.
///
/// Manages the base URL, injects `Authorization: Bearer <token>` when the
/// profile store holds a token, and normalizes failures into [`ApiError`].
/// No retry, no cancellation, no request deduplication.
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn ProfileStore>,
    certificate_id_mode: CertificateIdMode,
}

impl ApiClient {
    /// Create a new API client with the given base URL and profile store.
    pub fn new(base_url: &str, store: Arc<dyn ProfileStore>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
            certificate_id_mode: CertificateIdMode::default(),
        }
    }

    /// Create a client with the base URL taken from `LEARNHUB_API_URL`,
    /// falling back to the localhost default.
    pub fn from_env(store: Arc<dyn ProfileStore>) -> Self {
        let base_url =
            std::env::var("LEARNHUB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url, store)
    }

    /// Select how certificate identifiers are generated (default: per-fetch).
    pub fn with_certificate_id_mode(mut self, mode: CertificateIdMode) -> Self {
        self.certificate_id_mode = mode;
        self
    }

    pub fn certificate_id_mode(&self) -> CertificateIdMode {
        self.certificate_id_mode
    }

    /// Profile store backing this client (token, display name, theme).
    pub fn store(&self) -> &dyn ProfileStore {
        self.store.as_ref()
    }

    /// Send a request to a relative API path and return the raw response.
    ///
    /// Builds the absolute URL, attaches `Content-Type: application/json`,
    /// attaches the bearer token when present, and traces the request on
    /// send and the status on receipt. Non-2xx responses are folded into
    /// [`ApiError::Status`] with the response body.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: &[(&str, String)],
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let token = self.store.token();
        let authenticated = token.is_some();
        log::debug!(
            "-> {} {} (auth: {}, params: {:?})",
            method,
            url,
            authenticated,
            params
        );

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if !params.is_empty() {
            builder = builder.query(params);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        if let Some(ref t) = token {
            builder = builder.bearer_auth(t);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                log::error!("!! {} {} (auth: {}): {}", method, url, authenticated, err);
                return Err(ApiError::Transport(err));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!(
                "!! {} {} -> {} (auth: {}): {}",
                method,
                url,
                status,
                authenticated,
                body
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        log::debug!("<- {} {} {}", status.as_u16(), method, url);
        Ok(response)
    }

    /// Send a request and decode the JSON response body.
    async fn request_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(method, path, body, &[]).await?;
        let payload = response.text().await?;
        log::trace!("response payload: {}", payload);
        Ok(serde_json::from_str(&payload)?)
    }

    /// GET a relative API path, decoding the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_json::<T, ()>(Method::GET, path, None).await
    }

    /// POST to a relative API path with no request body, decoding the JSON response.
    pub async fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_json::<T, ()>(Method::POST, path, None).await
    }

    /// PUT a JSON body to a relative API path, decoding the JSON response.
    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_json(Method::PUT, path, Some(body)).await
    }

    /// DELETE a relative API path, discarding the response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request::<()>(Method::DELETE, path, None, &[]).await?;
        Ok(())
    }
}
