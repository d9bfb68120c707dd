use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{AppError, AppResult, HttpError, RequestError};
use crate::model::{AuthScheme, HttpMethod, TestCaseRecord};

use super::DEFAULT_USER_AGENT;
use super::auth::apply_auth_header;
use super::headers::parse_header_map;

/// Everything needed to issue the request for one test case.
#[derive(Debug, Clone, Copy)]
pub struct OutboundRequest<'req> {
    pub method: &'req str,
    pub url: &'req str,
    pub body: &'req str,
    pub headers_json: &'req str,
    pub auth: AuthScheme,
    pub user: &'req str,
    pub password: &'req str,
}

impl<'req> OutboundRequest<'req> {
    #[must_use]
    pub fn for_record(record: &'req TestCaseRecord, url: &'req str) -> Self {
        Self {
            method: &record.method,
            url,
            body: &record.request_body,
            headers_json: &record.extra_headers,
            auth: record.auth_scheme,
            user: &record.credential_user,
            password: &record.credential_password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a single request and returns the fully-read response.
#[async_trait]
pub trait RequestSender: Send + Sync {
    async fn send(&self, request: OutboundRequest<'_>) -> Result<HttpResponse, RequestError>;
}

/// Production sender backed by one shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestSender {
    client: Client,
}

impl ReqwestSender {
    /// Builds the client with a bounded per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialized.
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RequestSender for ReqwestSender {
    async fn send(&self, request: OutboundRequest<'_>) -> Result<HttpResponse, RequestError> {
        let method: HttpMethod = request
            .method
            .parse()
            .map_err(|source| RequestError::InvalidMethod { source })?;
        let headers = parse_header_map(request.headers_json)?;

        let mut builder = self.client.request(method.to_reqwest(), request.url);
        if !request.body.is_empty() {
            builder = builder.body(request.body.to_owned());
        }
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        builder = apply_auth_header(builder, request.auth, request.user, request.password);

        debug!(%method, url = request.url, "Sending request");
        let response = builder
            .send()
            .await
            .map_err(|source| RequestError::Transport { source })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|source| RequestError::ReadBody { status, source })?;
        debug!(status, bytes = body.len(), "Received response");

        Ok(HttpResponse { status, body })
    }
}
