//! Domain layer: typed request and response payloads (no I/O).

mod request;
mod response;
mod value;

pub use request::{CreateServer, UpdateServer};
pub use response::{ApiError, DeleteServerResponse, Server, ServerListResponse};
pub use value::{ErrorCode, KnownErrorCode};
