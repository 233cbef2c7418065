use std::time::Duration;

use reqwest::{
    Client,
    RequestBuilder,
    Response,
};
use serde::Deserialize;

use crate::core::TangoError;

/// Error payload the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: Option<String>,
}

/// Handle to the REST backend: one reqwest client, a base URL, and the
/// bearer credential. Cloned freely into background tasks.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, TangoError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TangoError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path))
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.http.patch(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }

    /// Attaches the bearer credential, sends, and maps non-2xx responses to
    /// `TangoError::Api` carrying the backend's `message` field.
    pub(crate) async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, TangoError> {
        let builder =
            if self.token.is_empty() { builder } else { builder.bearer_auth(&self.token) };

        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ApiMessage>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("request failed").to_string()
            });

        Err(TangoError::Api { status: status.as_u16(), message })
    }
}
