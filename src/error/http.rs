use thiserror::Error;

/// Process-level HTTP setup failures.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// Failure of a single request issued for a test case.
///
/// These never abort a run; the executor folds them into the case detail.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{source}")]
    InvalidMethod {
        #[source]
        source: super::ValidationError,
    },
    #[error("error parsing headers JSON: {source}")]
    HeaderParse {
        #[source]
        source: serde_json::Error,
    },
    #[error("error in HTTP request: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("error reading response body: {source}")]
    ReadBody {
        status: u16,
        #[source]
        source: reqwest::Error,
    },
    #[cfg(test)]
    #[error("{message}")]
    Scripted { message: String },
}

impl RequestError {
    /// Status code already received before the failure, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ReadBody { status, .. } => Some(*status),
            Self::InvalidMethod { .. } | Self::HeaderParse { .. } | Self::Transport { .. } => None,
            #[cfg(test)]
            Self::Scripted { .. } => None,
        }
    }
}
