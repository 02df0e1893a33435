//! HTTP Client Abstractions
//!
//! - `HttpClientConfig` - shared client settings and builder
//! - `HttpResponseUtils` - response to `ApiError` mapping (re-exported from utils)

pub mod provider;

pub use provider::HttpClientConfig;
pub use crate::utils::{HttpResponseUtils, UpstreamCall};
