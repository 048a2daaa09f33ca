use std::fmt;

use serde::Deserialize;

use crate::domain::value::ErrorCode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
/// A Postmark server record.
///
/// Fields absent from the response body decode to their defaults, so a
/// success-shaped `404` body yields a record with `id == 0`.
pub struct Server {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub api_tokens: Vec<String>,
    pub color: String,
    pub smtp_api_activated: bool,
    pub raw_email_enabled: bool,
    pub delivery_type: String,
    pub server_link: String,
    pub inbound_address: String,
    pub inbound_hook_url: String,
    pub bounce_hook_url: String,
    pub open_hook_url: String,
    pub delivery_hook_url: String,
    pub post_first_open_only: bool,
    pub inbound_domain: String,
    pub inbound_hash: String,
    pub inbound_spam_threshold: i64,
    pub track_opens: bool,
    pub track_links: String,
    pub include_bounce_content_in_hook: bool,
    pub click_hook_url: String,
    pub enable_smtp_api_error_hooks: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
/// One page of server records from `GET servers`.
pub struct ServerListResponse {
    pub total_count: i64,
    pub servers: Vec<Server>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
/// Acknowledgement payload from `DELETE servers/{id}`.
pub struct DeleteServerResponse {
    pub error_code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
/// Structured error payload Postmark returns on non-success statuses.
pub struct ApiError {
    pub error_code: ErrorCode,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (error code {})", self.message, self.error_code)
    }
}
