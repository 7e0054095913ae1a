//! Client configuration: token, host, connectivity check and input policies.

use std::time::Duration;

use crate::Error;

/// Production REST API host.
pub const DEFAULT_BASE_URL: &str = "https://rest-api.lobbyview.org";

/// Tokens shorter than this are rejected before any request is made.
pub const MIN_TOKEN_LENGTH: usize = 20;

/// What [`Client::new`](crate::Client::new) does when the connectivity check fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionCheckPolicy {
    /// Return the error from the constructor.
    #[default]
    Strict,
    /// Log a warning and hand back the client anyway.
    Warn,
}

/// What an endpoint call does when the query carries no filter predicates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyFilterPolicy {
    /// Send the unfiltered query and let the server page through everything.
    #[default]
    Passthrough,
    /// Fail with [`Error::InvalidInput`] without sending a request.
    Reject,
}

/// Everything a [`Client`](crate::Client) needs, passed explicitly at construction.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Opaque API token sent in the `token` header.
    pub token: String,
    /// Scheme and host of the API, without a trailing slash.
    pub base_url: String,
    /// Issue one unfiltered `legislators` request on construction.
    pub check_connection: bool,
    pub connection_check_policy: ConnectionCheckPolicy,
    pub empty_filter_policy: EmptyFilterPolicy,
    /// Per-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a config for the production API with the connectivity check enabled.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            check_connection: true,
            connection_check_policy: ConnectionCheckPolicy::default(),
            empty_filter_policy: EmptyFilterPolicy::default(),
            timeout: None,
        }
    }

    /// Reads the config from `LOBBYVIEW_*` environment variables.
    ///
    /// `LOBBYVIEW_TOKEN` is required. `LOBBYVIEW_BASE_URL`,
    /// `LOBBYVIEW_CHECK_CONNECTION`, `LOBBYVIEW_TIMEOUT_SECS` and
    /// `LOBBYVIEW_REJECT_EMPTY_FILTERS` are optional.
    pub fn from_env() -> Result<Self, Error> {
        let token = std::env::var("LOBBYVIEW_TOKEN").map_err(|_| {
            Error::InvalidInput("LOBBYVIEW_TOKEN is not set".to_string())
        })?;
        let mut config = Self::new(token);
        if let Ok(base_url) = std::env::var("LOBBYVIEW_BASE_URL") {
            config = config.with_base_url(&base_url);
        }
        config.check_connection = env_bool("LOBBYVIEW_CHECK_CONNECTION", true);
        if env_bool("LOBBYVIEW_REJECT_EMPTY_FILTERS", false) {
            config.empty_filter_policy = EmptyFilterPolicy::Reject;
        }
        if let Some(secs) = env_u64("LOBBYVIEW_TIMEOUT_SECS") {
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_check_connection(mut self, check_connection: bool) -> Self {
        self.check_connection = check_connection;
        self
    }

    pub fn with_connection_check_policy(mut self, policy: ConnectionCheckPolicy) -> Self {
        self.connection_check_policy = policy;
        self
    }

    pub fn with_empty_filter_policy(mut self, policy: EmptyFilterPolicy) -> Self {
        self.empty_filter_policy = policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Rejects tokens that cannot possibly be valid, without touching the network.
    pub fn validate_token(&self) -> Result<(), Error> {
        let token = self.token.trim();
        if token.is_empty() || token.chars().count() < MIN_TOKEN_LENGTH {
            tracing::error!("API token is missing or shorter than {} characters", MIN_TOKEN_LENGTH);
            return Err(Error::Unauthorized { status: None });
        }
        Ok(())
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
