//! Client layer: request construction, dispatch, and error mapping.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::{
    ApiError, CreateServer, DeleteServerResponse, Server, ServerListResponse, UpdateServer,
};
use crate::transport::{self, ClassifyError, Envelope};

const DEFAULT_BASE_URL: &str = "https://api.postmarkapp.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const TOKEN_ENV_VAR: &str = "POSTMARK_API_TOKEN";
const ACCOUNT_TOKEN_HEADER: &str = "X-Postmark-Account-Token";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
/// Outgoing request handed to the transport.
///
/// Built entirely in memory by the client; dispatching it is the
/// transport's job.
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
/// Raw result of one HTTP exchange.
///
/// The transport must read the entire body into memory before returning.
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
/// Failures a transport implementation can report.
pub enum TransportError {
    /// The exchange could not be completed (DNS, TLS, timeout, refusal).
    #[error("failed to send request: {0}")]
    Send(#[source] Box<dyn StdError + Send + Sync>),

    /// The response arrived but its body could not be fully read.
    #[error("failed to read response body: {0}")]
    Body(#[source] Box<dyn StdError + Send + Sync>),
}

/// Pluggable HTTP exchange capability.
///
/// The default implementation wraps [`reqwest::Client`]; supply your own
/// through [`PostmarkClientBuilder::transport`] to reuse an existing HTTP
/// stack or to stub out the network in tests.
pub trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let mut builder = self.client.request(request.method, request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|err| TransportError::Send(Box::new(err)))?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|err| TransportError::Body(Box::new(err)))?
                .to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PostmarkClient`].
///
/// Remote failures keep the raw [`Envelope`] attached so the caller can
/// inspect the status and body even when the payload was rejected or
/// could not be decoded. Nothing is retried or logged away internally;
/// every failure is terminal for that single call.
pub enum PostmarkError {
    /// Request body could not be encoded as JSON.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The base URL and path do not combine into a valid absolute URL.
    #[error("invalid request URL: {0}")]
    Url(#[source] url::ParseError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The response body stream could not be fully read.
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] Box<dyn StdError + Send + Sync>),

    /// Postmark rejected the call with a structured error payload.
    #[error("API error: {error}")]
    Api { error: ApiError, response: Envelope },

    /// Response body could not be parsed as the expected shape.
    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        response: Envelope,
    },
}

#[derive(Clone)]
/// Builder for [`PostmarkClient`].
///
/// Later calls override earlier ones for the same field, including the
/// defaults. Nothing is validated here: an empty token builds fine and
/// simply fails remotely at call time.
pub struct PostmarkClientBuilder {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl PostmarkClientBuilder {
    /// Create a builder with the production API root, a 10 second
    /// timeout, and the token deferred to `POSTMARK_API_TOKEN`.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the API root URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the account token, overriding the `POSTMARK_API_TOKEN` default
    /// and any token set earlier on this builder.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout applied by the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header sent by the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Install a custom transport.
    ///
    /// The timeout and user-agent settings only apply to the default
    /// transport; a custom one owns those concerns itself.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build a [`PostmarkClient`].
    pub fn build(self) -> Result<PostmarkClient, PostmarkError> {
        let token = match self.token {
            Some(token) => token,
            None => std::env::var(TOKEN_ENV_VAR).unwrap_or_default(),
        };

        let http: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder().timeout(self.timeout);
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| PostmarkError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(PostmarkClient {
            base_url: self.base_url,
            token,
            http,
        })
    }
}

impl Default for PostmarkClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
/// High-level client for the Postmark account API.
///
/// Configuration is immutable after construction; clone the client to
/// share it across tasks. Each operation performs exactly one HTTP round
/// trip through the configured transport.
pub struct PostmarkClient {
    base_url: String,
    token: String,
    http: Arc<dyn HttpTransport>,
}

impl PostmarkClient {
    /// Create a client with default settings, reading the account token
    /// from `POSTMARK_API_TOKEN` when it is set.
    ///
    /// For more customization, use [`PostmarkClient::builder`].
    pub fn new() -> Result<Self, PostmarkError> {
        Self::builder().build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> PostmarkClientBuilder {
        PostmarkClientBuilder::new()
    }

    /// Create a server.
    ///
    /// Errors:
    /// - [`PostmarkError::Api`] when Postmark rejects the payload,
    /// - [`PostmarkError::Decode`] when the response body does not decode
    ///   as a [`Server`].
    pub async fn create_server(&self, request: CreateServer) -> Result<Server, PostmarkError> {
        let request = self.build_request(Method::POST, transport::SERVERS_PATH, Some(&request))?;
        let response = self.execute(request).await?;
        decode_response(response)
    }

    /// Fetch a single server by id.
    ///
    /// Postmark reports an unknown id with HTTP 404, which this client
    /// deliberately surfaces as a success-shaped response; the decoded
    /// record then holds field defaults (`id == 0`). Compare
    /// [`Server::id`] against the requested id when absence matters.
    pub async fn read_server(&self, server_id: &str) -> Result<Server, PostmarkError> {
        let request =
            self.build_request::<()>(Method::GET, &transport::server_path(server_id), None)?;
        let response = self.execute(request).await?;
        decode_response(response)
    }

    /// Replace a server's settings.
    pub async fn update_server(
        &self,
        server_id: &str,
        request: UpdateServer,
    ) -> Result<Server, PostmarkError> {
        let request = self.build_request(
            Method::PUT,
            &transport::server_path(server_id),
            Some(&request),
        )?;
        let response = self.execute(request).await?;
        decode_response(response)
    }

    /// List servers, forwarding `count` and `offset` as literal query values.
    pub async fn list_servers(
        &self,
        count: &str,
        offset: &str,
    ) -> Result<ServerListResponse, PostmarkError> {
        let request = self.build_request::<()>(
            Method::GET,
            &transport::list_servers_path(count, offset),
            None,
        )?;
        let response = self.execute(request).await?;
        decode_response(response)
    }

    /// Delete a server by id.
    pub async fn delete_server(
        &self,
        server_id: &str,
    ) -> Result<DeleteServerResponse, PostmarkError> {
        let request =
            self.build_request::<()>(Method::DELETE, &transport::server_path(server_id), None)?;
        let response = self.execute(request).await?;
        decode_response(response)
    }

    /// Assemble an in-memory request for `path` relative to the base URL.
    ///
    /// Every request carries `Accept`, `Content-Type`, and the account
    /// token header; no request is dispatched without them. `path` is
    /// joined as `{base_url}/{path}` and the caller owns any query-string
    /// encoding inside it.
    fn build_request<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<HttpRequest, PostmarkError> {
        let body = match body {
            Some(value) => {
                Some(transport::encode_json_body(value).map_err(PostmarkError::Serialize)?)
            }
            None => None,
        };
        let url =
            Url::parse(&format!("{}/{path}", self.base_url)).map_err(PostmarkError::Url)?;

        let headers = vec![
            ("Accept".to_owned(), "application/json".to_owned()),
            ("Content-Type".to_owned(), "application/json".to_owned()),
            (ACCOUNT_TOKEN_HEADER.to_owned(), self.token.clone()),
        ];

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// One round trip: dispatch through the transport, then classify the
    /// status/body pair. No retries at any layer.
    async fn execute(&self, request: HttpRequest) -> Result<Envelope, PostmarkError> {
        debug!("{} {}", request.method, request.url);

        let response = self.http.execute(request).await.map_err(|err| match err {
            TransportError::Send(source) => PostmarkError::Transport(source),
            TransportError::Body(source) => PostmarkError::BodyRead(source),
        })?;

        transport::classify_response(response.status, response.body).map_err(|err| match err {
            ClassifyError::Api { error, response } => PostmarkError::Api { error, response },
            ClassifyError::Decode { source, response } => {
                PostmarkError::Decode { source, response }
            }
        })
    }
}

fn decode_response<T: DeserializeOwned>(response: Envelope) -> Result<T, PostmarkError> {
    match transport::decode_json_body(&response) {
        Ok(value) => Ok(value),
        Err(source) => Err(PostmarkError::Decode { source, response }),
    }
}
