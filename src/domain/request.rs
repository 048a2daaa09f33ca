use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
/// Payload for `POST servers`.
///
/// Postmark fills in every omitted setting with its own defaults; use
/// [`UpdateServer`] afterwards to configure hooks and tracking.
pub struct CreateServer {
    pub name: String,
    pub color: String,
    pub smtp_api_activated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
/// Payload for `PUT servers/{id}`.
///
/// The full field set is sent as-is; Postmark treats the payload as the
/// new desired state of the server.
pub struct UpdateServer {
    pub name: String,
    pub color: String,
    pub smtp_api_activated: bool,
    pub raw_email_enabled: bool,
    pub inbound_hook_url: String,
    pub bounce_hook_url: String,
    pub open_hook_url: String,
    pub delivery_hook_url: String,
    pub post_first_open_only: bool,
    pub inbound_domain: String,
    pub inbound_spam_threshold: i64,
    pub track_opens: bool,
    pub track_links: String,
    pub include_bounce_content_in_hook: bool,
    pub click_hook_url: String,
    pub enable_smtp_api_error_hooks: bool,
}
