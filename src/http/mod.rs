//! HTTP request adapter: one outbound call per test case.
mod auth;
mod client;
mod headers;

#[cfg(test)]
pub(crate) mod test_server;

pub use auth::authorization_value;
pub use client::{HttpResponse, OutboundRequest, ReqwestSender, RequestSender};
pub use headers::parse_header_map;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("apicase/", env!("CARGO_PKG_VERSION"));
