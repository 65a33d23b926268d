//! HTTP transport with tracing instrumentation.
//!
//! [`HttpTransport`] sends requests with `reqwest` and reports every failure
//! as a [`ClientError`] without interpreting it further.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{instrument, Span};
use url::Url;

use schematic_define::RestMethod;

use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError, ConfigError};
use crate::transport::{BoxFuture, Transport, TransportRequest};

/// Transport over HTTPS.
///
/// The underlying `reqwest::Client` pools connections; clone the transport
/// (or share it behind an `Arc`) instead of building a new one per call.
///
/// ## Examples
///
/// ```
/// use schematic::{ClientConfig, HttpTransport};
///
/// let config = ClientConfig::new("https://api.example.com/v1").unwrap().with_token("t");
/// let transport = HttpTransport::new(&config).unwrap();
/// assert_eq!(transport.base_url().as_str(), "https://api.example.com/v1");
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpTransport {
    /// Builds a transport from `config`.
    ///
    /// ## Errors
    ///
    /// Returns an error if a header is not valid HTTP or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            headers.insert(header_name(name)?, header_value(name, value)?);
        }

        if let Some(token) = &config.token {
            if let (Some(name), Some(value)) =
                (config.auth.header_name(), config.auth.header_value(token))
            {
                let mut value = header_value(name, &value)?;
                value.set_sensitive(true);
                headers.insert(header_name(name)?, value);
            }
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        })
    }

    /// Returns the base URL for this transport.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `path` to the base URL, keeping any base path such as `/v1`.
    fn url_for(&self, request: &TransportRequest) -> Result<Url, ClientError> {
        let joined = format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            request.path
        );
        let mut url =
            Url::parse(&joined).map_err(|e| ClientError::Connection(format!("invalid URL: {e}")))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }

    fn classify(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout {
                duration_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else if error.is_connect() {
            ClientError::Connection(error.to_string())
        } else {
            ClientError::Request(error)
        }
    }

    #[instrument(
        name = "api_request",
        skip(self, request),
        fields(
            http.method = %request.method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn send(&self, request: TransportRequest) -> Result<Value, ClientError> {
        let url = self.url_for(&request)?;
        Span::current().record("http.url", url.as_str());

        let mut builder = self.client.request(to_reqwest(request.method), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            let text = response.text().await.unwrap_or_default();
            let (code, message) = upstream_error(&text);
            return Err(ClientError::HttpStatus {
                status: status_code,
                code,
                message: message.unwrap_or_else(|| {
                    if text.is_empty() {
                        status.to_string()
                    } else {
                        text
                    }
                }),
            });
        }

        Span::current().record("otel.status_code", "OK");

        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode {
            status: status_code,
            message: e.to_string(),
        })
    }
}

impl Transport for HttpTransport {
    fn request(&self, request: TransportRequest) -> BoxFuture<'_, Result<Value, ClientError>> {
        Box::pin(self.send(request))
    }
}

fn to_reqwest(method: RestMethod) -> reqwest::Method {
    match method {
        RestMethod::Get => reqwest::Method::GET,
        RestMethod::Post => reqwest::Method::POST,
        RestMethod::Put => reqwest::Method::PUT,
        RestMethod::Patch => reqwest::Method::PATCH,
        RestMethod::Delete => reqwest::Method::DELETE,
        RestMethod::Head => reqwest::Method::HEAD,
        RestMethod::Options => reqwest::Method::OPTIONS,
    }
}

fn header_name(name: &str) -> Result<HeaderName, ConfigError> {
    HeaderName::try_from(name).map_err(|e| ConfigError::invalid_header(name, e))
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::try_from(value).map_err(|e| ConfigError::invalid_header(name, e))
}

/// Extracts `error.code` and `error.message` from an error body.
fn upstream_error(body: &str) -> (Option<String>, Option<String>) {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return (None, None);
    };
    let field = |pointer: &str| {
        value
            .pointer(pointer)
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    (field("/error/code"), field("/error/message"))
}
