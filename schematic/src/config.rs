//! Client configuration.
//!
//! A [`ClientConfig`] starts from the API definition (base URL, auth
//! strategy, default headers) and is completed from the environment or by
//! the builder methods.

use std::fmt;
use std::time::Duration;

use schematic_define::{AuthStrategy, RestApi};
use url::Url;

use crate::error::ConfigError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for building a transport.
///
/// ## Examples
///
/// ```
/// use std::time::Duration;
/// use schematic::ClientConfig;
///
/// let config = ClientConfig::new("https://api.example.com/v1")
///     .unwrap()
///     .with_token("secret")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// assert!(!format!("{config:?}").contains("secret"));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to.
    pub base_url: Url,
    /// Credential applied according to `auth`.
    pub token: Option<String>,
    /// How the credential is sent.
    pub auth: AuthStrategy,
    /// Whole-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
    /// Headers added to every request.
    pub headers: Vec<(String, String)>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("auth", &self.auth)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("headers", &self.headers)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with bearer auth and no token.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            token: None,
            auth: AuthStrategy::BearerToken { header: None },
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("schematic/", env!("CARGO_PKG_VERSION")).to_string(),
            headers: Vec::new(),
        })
    }

    /// Creates a configuration from an API definition, without a token.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the definition's base URL does not parse.
    pub fn for_api(api: &RestApi) -> Result<Self, ConfigError> {
        let mut config = Self::new(&api.base_url)?;
        config.auth = api.auth.clone();
        config.headers = api.headers.clone();
        Ok(config)
    }

    /// Creates a configuration from an API definition and the process environment.
    ///
    /// Reads, for an API named `Hcloud`:
    ///
    /// - the credential from the first set variable of `api.env_auth` (`HCLOUD_TOKEN`)
    /// - `HCLOUD_ENDPOINT` to override the base URL
    /// - `HCLOUD_TIMEOUT` as whole seconds
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if the API requires auth and
    /// no credential variable is set, [`ConfigError::InvalidUrl`] for a bad
    /// endpoint and [`ConfigError::InvalidTimeout`] for a bad timeout.
    pub fn from_env(api: &RestApi) -> Result<Self, ConfigError> {
        Self::from_lookup(api, |name| std::env::var(name).ok())
    }

    /// Like [`ClientConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(api: &RestApi, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = api.name.to_uppercase();
        let mut config = Self::for_api(api)?;

        if let Some(endpoint) = lookup(&format!("{prefix}_ENDPOINT")) {
            config.base_url = Url::parse(&endpoint)?;
        }

        if let Some(raw) = lookup(&format!("{prefix}_TIMEOUT")) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.token = api
            .env_auth
            .iter()
            .filter_map(|name| lookup(name.as_str()))
            .find(|value| !value.is_empty());

        if config.token.is_none() && api.auth != AuthStrategy::None {
            return Err(ConfigError::missing_credential(&api.env_auth));
        }
        Ok(config)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Replaces the base URL.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `base_url` does not parse.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = Url::parse(base_url)?;
        Ok(self)
    }
}
