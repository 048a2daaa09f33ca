pub(crate) const SERVERS_PATH: &str = "servers";

pub(crate) fn server_path(server_id: &str) -> String {
    format!("{SERVERS_PATH}/{server_id}")
}

/// `count` and `offset` are forwarded as literal query values; callers own
/// any encoding the values might need.
pub(crate) fn list_servers_path(count: &str, offset: &str) -> String {
    format!("{SERVERS_PATH}?count={count}&offset={offset}")
}
