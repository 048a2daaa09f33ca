//! Typed Rust client for the Postmark HTTP API.
//!
//! The crate is split into a domain layer of typed payloads, a transport
//! layer for wire-format details, and a small client layer that builds
//! authenticated requests and classifies responses. The account-level
//! server endpoints are covered; every operation is one HTTP round trip
//! with no retries, caching, or pagination traversal.
//!
//! ```rust,no_run
//! use postmark::{CreateServer, PostmarkClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), postmark::PostmarkError> {
//!     let client = PostmarkClient::builder().token("...").build()?;
//!     let server = client
//!         .create_server(CreateServer {
//!             name: "staging".to_owned(),
//!             color: "purple".to_owned(),
//!             smtp_api_activated: true,
//!         })
//!         .await?;
//!     println!("created server {}", server.id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, HttpRequest, HttpResponse, HttpTransport, PostmarkClient, PostmarkClientBuilder,
    PostmarkError, TransportError,
};
pub use domain::{
    ApiError, CreateServer, DeleteServerResponse, ErrorCode, KnownErrorCode, Server,
    ServerListResponse, UpdateServer,
};
pub use transport::Envelope;
