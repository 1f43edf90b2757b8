use std::fmt;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::AppError;

/// Thin wrapper around [`reqwest::Client`] for the HenrikDev Valorant API.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct HenrikClient {
    client: reqwest::Client,
    base_url: String,
    /// HenrikDev API key
    key: String,
}

impl fmt::Debug for HenrikClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HenrikClient")
            .field("base_url", &self.base_url)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl HenrikClient {
    pub fn new(base_url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            key: key.into(),
        }
    }

    /// GET `path` relative to the base url and decode the JSON body.
    ///
    /// Any non-success status becomes [`AppError::UpstreamFetch`]; network and
    /// decoding failures become [`AppError::Transport`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        trace!(path, "[HENRIK] GET");

        let res = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.key)
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            Ok(res.json().await?)
        } else {
            debug!(path, status = status.as_u16(), "[HENRIK] non-success response");
            Err(AppError::UpstreamFetch {
                status: status.as_u16(),
                path: path.to_string(),
            })
        }
    }
}
