//! Deluge web UI RPC methods used by the client.
use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `auth.login`. Params: `[password]`.
    #[display("auth.login")]
    AuthLogin,
    /// `web.get_hosts`. Params: `[]`.
    #[display("web.get_hosts")]
    GetHosts,
    /// `web.get_host_status`. Params: `[host_id]`.
    #[display("web.get_host_status")]
    GetHostStatus,
    /// `core.get_torrents_status`. Params: `[filter, keys]`.
    #[display("core.get_torrents_status")]
    GetTorrentsStatus,
}

impl Method {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::AuthLogin => "auth.login",
            Method::GetHosts => "web.get_hosts",
            Method::GetHostStatus => "web.get_host_status",
            Method::GetTorrentsStatus => "core.get_torrents_status",
        }
    }
}
