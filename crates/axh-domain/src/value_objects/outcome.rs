//! Fetch outcomes
//!
//! Every public fetch returns a [`FetchOutcome`]: a value, an explicit
//! "no data" marker, or a tagged upstream failure. Handlers branch on the
//! variant to pick between "no profile found" and "try again later".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a single upstream call
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Tagged upstream failure
///
/// Carries enough context to log and to render a user-facing message; it is
/// a value, not a panic or a propagated `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Upstream name (e.g. `GatewayAPI`)
    pub upstream: String,
    /// Operation that failed (e.g. `getPlayerItems`)
    pub operation: String,
    /// Entity the call was about, usually a user id
    pub entity: Option<String>,
    /// HTTP status if a response was received
    pub status: Option<u16>,
    /// Failure description
    pub message: String,
}

impl ApiError {
    pub fn new(
        upstream: impl Into<String>,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            upstream: upstream.into(),
            operation: operation.into(),
            entity: None,
            status: None,
            message: message.into(),
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Upstream asked us to slow down
    pub fn is_rate_limited(&self) -> bool {
        self.status == Some(429)
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_some_and(|s| s >= 500)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Error:", self.upstream)?;
        if let Some(status) = self.status {
            write!(f, " {status}")?;
        }
        write!(f, " {}", self.operation)?;
        if let Some(entity) = &self.entity {
            write!(f, " - {entity}")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Three-way result of a fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum FetchOutcome<T> {
    /// Data was found, from the cache or the upstream
    Found(T),
    /// The upstream answered successfully with no data
    Empty,
    /// The upstream failed
    Failed(ApiError),
}

impl<T> FetchOutcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Take the value, dropping the distinction between empty and failed
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchOutcome<U> {
        match self {
            Self::Found(value) => FetchOutcome::Found(f(value)),
            Self::Empty => FetchOutcome::Empty,
            Self::Failed(err) => FetchOutcome::Failed(err),
        }
    }

    /// Chain a dependent fetch on the found value
    pub fn and_then<U, F: FnOnce(T) -> FetchOutcome<U>>(self, f: F) -> FetchOutcome<U> {
        match self {
            Self::Found(value) => f(value),
            Self::Empty => FetchOutcome::Empty,
            Self::Failed(err) => FetchOutcome::Failed(err),
        }
    }

    /// Convert into a `Result` for callers that propagate with `?`
    pub fn into_result(self) -> ApiResult<Option<T>> {
        match self {
            Self::Found(value) => Ok(Some(value)),
            Self::Empty => Ok(None),
            Self::Failed(err) => Err(err),
        }
    }
}

impl<T> From<ApiResult<Option<T>>> for FetchOutcome<T> {
    fn from(result: ApiResult<Option<T>>) -> Self {
        match result {
            Ok(Some(value)) => Self::Found(value),
            Ok(None) => Self::Empty,
            Err(err) => Self::Failed(err),
        }
    }
}
