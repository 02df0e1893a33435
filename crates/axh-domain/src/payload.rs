//! Cacheable payload contract
//!
//! The cache-aside orchestrator is generic over [`CachedPayload`]: it calls
//! [`normalize`](CachedPayload::normalize) on fresh upstream data before
//! writing it back, refuses to cache [`is_empty`](CachedPayload::is_empty)
//! values, and lets a payload pick its own lifetime.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub trait CachedPayload: Serialize + DeserializeOwned + Send + Sync {
    /// Clean up upstream data (names, addresses, derived links)
    fn normalize(&mut self) {}

    /// A successful response that carries no data
    fn is_empty(&self) -> bool {
        false
    }

    /// Lifetime chosen by the payload itself, taking precedence over the
    /// caller's policy
    fn ttl_override(&self) -> Option<Duration> {
        None
    }
}

impl<T: CachedPayload> CachedPayload for Vec<T> {
    fn normalize(&mut self) {
        self.iter_mut().for_each(CachedPayload::normalize);
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

/// Opaque upstream JSON, used for catalogs the bot only passes through
impl CachedPayload for serde_json::Value {
    fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Array(items) => items.is_empty(),
            Self::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}
