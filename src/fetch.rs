// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Retrieval of API descriptor documents.
///
/// Each document is fetched with a single GET bounded by the configured
/// timeout. There is no retry; any failure ends the run.
use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Error;

/// Decoded descriptor document with keys in document order.
pub type Descriptor = Map<String, Value,>;

/// HTTP client for descriptor documents.
#[derive(Debug, Clone,)]
pub struct DescriptorFetcher
{
    client: Client,
}

impl DescriptorFetcher
{
    /// Builds a fetcher whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] when the TLS backend cannot be initialized.
    pub fn new(timeout: Duration,) -> Result<Self, Error,>
    {
        let client = Client::builder()
            .timeout(timeout,)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),)
            .build()
            .map_err(|source| Error::Client {
                source,
            },)?;

        Ok(Self {
            client,
        },)
    }

    /// Fetches and decodes the descriptor at `url`.
    ///
    /// # Errors
    ///
    /// * [`Error::Transport`] on connection failure, timeout, or an
    ///   interrupted body.
    /// * [`Error::Status`] when the server does not answer with 2xx.
    /// * [`Error::Decode`] when the body is not a JSON object.
    pub async fn fetch(&self, url: &str,) -> Result<Descriptor, Error,>
    {
        debug!("GET {}", url);

        let transport = |source| Error::Transport {
            url: url.to_owned(),
            source,
        };

        let response = self.client.get(url,).send().await.map_err(transport,)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url:    url.to_owned(),
                status: status.as_u16(),
            },);
        }

        let body = response.bytes().await.map_err(transport,)?;
        debug!("received {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body,).map_err(|source| Error::Decode {
            url: url.to_owned(),
            source,
        },)
    }
}
