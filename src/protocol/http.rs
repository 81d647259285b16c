// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the bulb-control API.

use std::time::Duration;

use reqwest::Client;

use crate::error::ProtocolError;
use crate::protocol::Transmit;
use crate::state::BulbRegistry;

/// Configuration for the HTTP transport.
///
/// The defaults describe the local control API the crate was built
/// against: `http://127.0.0.1:8000/api`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use lumor_lib::HttpConfig;
///
/// // The stock local endpoint
/// let config = HttpConfig::default();
/// assert_eq!(config.endpoint_url(), "http://127.0.0.1:8000/api");
///
/// // A remote hub on a different port and path
/// let config = HttpConfig::new("192.168.1.40")
///     .with_port(8080)
///     .with_path("/bulbs")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.endpoint_url(), "http://192.168.1.40:8080/bulbs");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    path: String,
    timeout: Duration,
}

impl HttpConfig {
    /// Default control API host.
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    /// Default control API port.
    pub const DEFAULT_PORT: u16 = 8000;
    /// Default control API path.
    pub const DEFAULT_PATH: &'static str = "/api";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the specified host, keeping the default
    /// port, path, and timeout.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            path: Self::DEFAULT_PATH.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a custom path. A missing leading slash is added.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the endpoint URL from this configuration.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }

    /// Creates an [`HttpTransmitter`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the host is empty or the HTTP client
    /// cannot be created.
    pub fn into_transmitter(self) -> Result<HttpTransmitter, ProtocolError> {
        HttpTransmitter::new(self)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST)
    }
}

/// HTTP transmitter for the bulb-control API.
///
/// Each push is a single `POST` of the full registry as JSON
/// (`Content-Type: application/json`). The API's reply is not part of the
/// contract: any status code is accepted and the body is never read.
///
/// # Examples
///
/// ```no_run
/// use lumor_lib::{BulbRegistry, BulbState, HttpConfig, Transmit};
///
/// # async fn example() -> lumor_lib::Result<()> {
/// let transmitter = HttpConfig::default().into_transmitter()?;
/// let registry = BulbRegistry::new().with_bulb("nightstand", BulbState::default());
///
/// // Awaitable send, for callers that want the outcome
/// transmitter.send_states(&registry).await?;
///
/// // Fire-and-forget, for callers that don't
/// transmitter.dispatch(registry);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransmitter {
    endpoint: String,
    client: Client,
}

impl HttpTransmitter {
    /// Creates a transmitter from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty, or
    /// `ProtocolError::Http` if the HTTP client cannot be created.
    pub fn new(config: HttpConfig) -> Result<Self, ProtocolError> {
        if config.host().is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "host must not be empty".to_string(),
            ));
        }

        let endpoint = config.endpoint_url();

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self { endpoint, client })
    }

    /// Returns the endpoint URL snapshots are pushed to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transmit for HttpTransmitter {
    async fn send_states(&self, states: &BulbRegistry) -> Result<(), ProtocolError> {
        tracing::debug!(endpoint = %self.endpoint, bulbs = states.len(), "pushing bulb states");

        // The reply is deliberately ignored: any status code is accepted
        // and the body is never read.
        self.client
            .post(&self.endpoint)
            .json(states)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        Ok(())
    }

    /// Dispatches a push on a background task and returns immediately.
    ///
    /// A delivery failure is logged at debug level and otherwise
    /// unobserved.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    fn dispatch(&self, states: BulbRegistry) {
        let transmitter = self.clone();
        tokio::spawn(async move {
            if let Err(err) = transmitter.send_states(&states).await {
                tracing::debug!(error = %err, "bulb state push failed");
            }
        });
    }
}
