use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Trace,
    Connect,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Connect => "CONNECT",
        }
    }

    #[must_use]
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Options => reqwest::Method::OPTIONS,
            HttpMethod::Trace => reqwest::Method::TRACE,
            HttpMethod::Connect => reqwest::Method::CONNECT,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            "TRACE" => Ok(HttpMethod::Trace),
            "CONNECT" => Ok(HttpMethod::Connect),
            _ => Err(ValidationError::InvalidHttpMethod {
                value: s.to_owned(),
            }),
        }
    }
}

/// Authentication directive attached to a test case.
///
/// Matching is exact and case-sensitive: only `Bearer` and `Basic` select a
/// scheme, every other value (including `None` and empty) sends no
/// `Authorization` header.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthScheme {
    #[default]
    None,
    Bearer,
    Basic,
}

impl AuthScheme {
    #[must_use]
    pub fn from_column(value: &str) -> Self {
        match value {
            "Bearer" => AuthScheme::Bearer,
            "Basic" => AuthScheme::Basic,
            _ => AuthScheme::None,
        }
    }
}

/// One declarative API test, as loaded from the suite file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseRecord {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    /// Method column as written; resolved when the request is built.
    pub method: String,
    pub base_url: String,
    pub endpoint_path: String,
    pub auth_scheme: AuthScheme,
    pub credential_user: String,
    pub credential_password: String,
    /// JSON object of header name to value, or empty.
    pub extra_headers: String,
    pub request_body: String,
    pub expected_status_code: u16,
    /// Empty means the response body is not checked.
    pub expected_response_body: String,
}

impl TestCaseRecord {
    /// Request URL: base and path joined verbatim, without slash handling.
    #[must_use]
    pub fn full_url(&self) -> String {
        let mut url = String::with_capacity(
            self.base_url
                .len()
                .saturating_add(self.endpoint_path.len()),
        );
        url.push_str(&self.base_url);
        url.push_str(&self.endpoint_path);
        url
    }

    #[must_use]
    pub fn checks_body(&self) -> bool {
        !self.expected_response_body.is_empty()
    }
}
