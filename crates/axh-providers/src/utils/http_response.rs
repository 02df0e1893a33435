//! HTTP Response Utilities
//!
//! Turns transport failures and non-success statuses into tagged
//! [`ApiError`] values, so every upstream client reports failures the same
//! way.

use axh_domain::{ApiError, ApiResult};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Identifies one upstream call in error reports
#[derive(Debug, Clone, Copy)]
pub struct UpstreamCall<'a> {
    pub upstream: &'a str,
    pub operation: &'a str,
    pub entity: Option<&'a str>,
}

impl<'a> UpstreamCall<'a> {
    pub fn new(upstream: &'a str, operation: &'a str) -> Self {
        Self {
            upstream,
            operation,
            entity: None,
        }
    }

    /// Attach the entity (user id, token, address) the call is about
    pub fn about(mut self, entity: &'a str) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn error(&self, message: impl Into<String>) -> ApiError {
        let error = ApiError::new(self.upstream, self.operation, message);
        match self.entity {
            Some(entity) => error.with_entity(entity),
            None => error,
        }
    }

    /// Error for a response with a non-success status
    pub fn status_error(&self, status: u16, body: &str) -> ApiError {
        let details = if body.trim().is_empty() { "no details" } else { body.trim() };
        let message = match status {
            401 | 403 => format!("authentication failed: {details}"),
            404 => format!("not found: {details}"),
            429 => format!("rate limit exceeded: {details}"),
            500..=599 => format!("server error: {details}"),
            _ => format!("request failed: {details}"),
        };
        self.error(message).with_status(status)
    }

    /// Error for a request that produced no usable response
    pub fn transport_error(&self, e: &reqwest::Error) -> ApiError {
        let message = if e.is_timeout() {
            "request timed out".to_string()
        } else if e.is_connect() {
            format!("connection failed: {e}")
        } else {
            format!("HTTP request failed: {e}")
        };
        let error = self.error(message);
        match e.status() {
            Some(status) => error.with_status(status.as_u16()),
            None => error,
        }
    }
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and decode the JSON body
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        call: UpstreamCall<'_>,
    ) -> ApiResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(call.status_error(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| call.error(format!("response parse failed: {e}")))
    }

    /// Like [`check_and_parse`](Self::check_and_parse), but a 404 means
    /// the upstream has no such entity
    pub async fn check_and_parse_optional<T: DeserializeOwned>(
        response: Response,
        call: UpstreamCall<'_>,
    ) -> ApiResult<Option<T>> {
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::check_and_parse(response, call).await.map(Some)
    }

    /// Plain text body; a 404 means the upstream has no such entity
    pub async fn check_and_read_text(
        response: Response,
        call: UpstreamCall<'_>,
    ) -> ApiResult<Option<String>> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(call.status_error(status.as_u16(), &body));
        }

        response
            .text()
            .await
            .map(Some)
            .map_err(|e| call.error(format!("response read failed: {e}")))
    }
}
