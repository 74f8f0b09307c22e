//! HTTP mutation calls against the remote authority.
//!
//! The gateway never applies a response to local state. The authoritative
//! result of a mutation is the broadcast event re-delivered on the push
//! channel, which avoids double-application when the originator is also a
//! subscriber, at the cost of a visible delay between request and local
//! reflection.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::core::{ItemDraft, ItemId, PATH_CREATE, PATH_DELETE, PATH_UPDATE, ValidationError};

/// Errors that can occur in the mutation gateway.
///
/// Send failures are deliberately absent: transport errors and non-success
/// statuses are written to the operator log and reported as
/// [`RequestOutcome::Failed`], never as an error the caller should branch a
/// recovery path on.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Base URL could not be parsed.
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Parser's complaint.
        reason: String,
    },

    /// Failed to construct the HTTP client.
    #[error("http client setup failed: {0}")]
    Setup(String),

    /// Draft failed its presence/sign checks; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the remote authority, e.g. `https://inventory.example`.
    pub base_url: String,

    /// Optional per-request timeout.
    ///
    /// `None` leaves a stalled call pending until the transport itself gives
    /// up, if it ever does.
    pub request_timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:4000".to_string(),
            request_timeout: None,
        }
    }
}

/// Builder for creating a `MutationGateway`.
#[derive(Debug, Default)]
pub struct GatewayBuilder {
    config: GatewayConfig,
}

impl GatewayBuilder {
    /// Create a new gateway builder.
    pub fn new() -> Self {
        Self {
            config: GatewayConfig::default(),
        }
    }

    /// Set the authority's base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set a per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = Some(timeout);
        self
    }

    /// Build the gateway.
    pub fn build(self) -> Result<MutationGateway, GatewayError> {
        MutationGateway::new(self.config)
    }
}

/// Outcome of a mutation call, as observed at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The authority answered with a success status.
    Delivered,
    /// Transport failure or non-success status; written to the operator log,
    /// not retried.
    Failed,
    /// A local guard rejected the call; no request was sent.
    Suppressed,
}

/// Issues create/update/delete requests against the remote authority.
///
/// # Example
///
/// ```no_run
/// use shelfsync::core::ItemDraft;
/// use shelfsync::gateway::MutationGateway;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let gateway = MutationGateway::builder()
///     .base_url("http://127.0.0.1:4000")
///     .build()?;
///
/// // The created record arrives later as a push channel event.
/// gateway.create(&ItemDraft::new("Dune", "Herbert", 12.0)).await?;
/// # Ok(())
/// # }
/// ```
pub struct MutationGateway {
    http: Client,
    base: String,
}

impl MutationGateway {
    /// Create a gateway from configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let base = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base).map_err(|err| GatewayError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: err.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| GatewayError::Setup(err.to_string()))?;

        Ok(Self { http, base })
    }

    /// Create a gateway builder.
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    fn create_url(&self) -> String {
        format!("{}/{}", self.base, PATH_CREATE)
    }

    fn update_url(&self, id: ItemId) -> String {
        format!("{}/{}/{}", self.base, PATH_UPDATE, id)
    }

    fn delete_url(&self, id: ItemId) -> String {
        format!("{}/{}/{}", self.base, PATH_DELETE, id)
    }

    /// Request creation of a new record.
    ///
    /// The draft is validated first; a failed check returns
    /// [`GatewayError::Validation`] without sending anything. The request
    /// itself is fire-and-forget: the created record, with its
    /// authority-assigned identifier, arrives as a `created` event on the
    /// push channel.
    pub async fn create(&self, draft: &ItemDraft) -> Result<RequestOutcome, GatewayError> {
        draft.validate()?;
        let url = self.create_url();
        let result = self.http.post(&url).json(draft).send().await;
        Ok(report("create", &url, result))
    }

    /// Request an update to an existing record.
    ///
    /// Same discipline as [`create`](Self::create). A success response
    /// echoes the updated record; the body is ignored, since the broadcast
    /// `updated` event carries the authoritative copy.
    pub async fn update(&self, id: ItemId, draft: &ItemDraft) -> Result<RequestOutcome, GatewayError> {
        draft.validate()?;
        let url = self.update_url(id);
        let result = self.http.put(&url).json(draft).send().await;
        Ok(report("update", &url, result))
    }

    /// Request deletion of a record.
    ///
    /// Requires a positive identifier. The check is a guard, not an error
    /// path: a non-positive identifier produces no request and reports
    /// [`RequestOutcome::Suppressed`].
    pub async fn delete(&self, id: ItemId) -> RequestOutcome {
        if id <= 0 {
            log::debug!("delete suppressed: non-positive id {id}");
            return RequestOutcome::Suppressed;
        }
        let url = self.delete_url(id);
        let result = self.http.delete(&url).send().await;
        report("delete", &url, result)
    }
}

/// Log the result of a sent request and fold it into an outcome.
///
/// Failures land in the operator log only. They are not retried and not
/// surfaced as a distinct recoverable state; the local view stays as it is
/// until the next event or reconnection snapshot.
fn report(
    op: &str,
    url: &str,
    result: Result<reqwest::Response, reqwest::Error>,
) -> RequestOutcome {
    match result {
        Ok(response) if response.status().is_success() => {
            log::debug!("{op} accepted by authority: {url}");
            RequestOutcome::Delivered
        }
        Ok(response) => {
            log::error!(
                "{op} rejected by authority: {url} returned {}",
                response.status()
            );
            RequestOutcome::Failed
        }
        Err(err) => {
            log::error!("{op} request failed: {url}: {err}");
            RequestOutcome::Failed
        }
    }
}
